use std::{any::Any, fmt::Debug};

use crate::{
    error::BuilderError,
    syntax::{ClassConst, ClassDeclaration, ClassMethod, Node, Property, TraitUse},
};

mod class;

pub use class::ClassBuilder;

/// Anything that can produce a node on demand, declaration builders included.
pub trait Builder {
    fn get_node(&self) -> Node;
}

/// A member handed to a declaration builder: either a finished node or a
/// builder that still has to produce one.
pub enum Member {
    Node(Node),
    Builder(Box<dyn Builder>),
}

impl Member {
    pub fn builder(builder: impl Builder + 'static) -> Member {
        Member::Builder(Box::new(builder))
    }

    /// Turns builders into nodes, nodes are passed through.
    pub fn into_node(self) -> Node {
        match self {
            Member::Node(node) => node,
            Member::Builder(builder) => builder.get_node(),
        }
    }
}

impl Debug for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Member::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Member::Builder(_) => f.debug_tuple("Builder").finish(),
        }
    }
}

impl From<Node> for Member {
    fn from(node: Node) -> Self {
        Member::Node(node)
    }
}

impl From<TraitUse> for Member {
    fn from(value: TraitUse) -> Self {
        Member::Node(value.into())
    }
}

impl From<ClassConst> for Member {
    fn from(value: ClassConst) -> Self {
        Member::Node(value.into())
    }
}

impl From<Property> for Member {
    fn from(value: Property) -> Self {
        Member::Node(value.into())
    }
}

impl From<ClassMethod> for Member {
    fn from(value: ClassMethod) -> Self {
        Member::Node(value.into())
    }
}

impl From<ClassDeclaration> for Member {
    fn from(value: ClassDeclaration) -> Self {
        Member::Node(value.into())
    }
}

impl From<Box<dyn Builder>> for Member {
    fn from(builder: Box<dyn Builder>) -> Self {
        Member::Builder(builder)
    }
}

impl From<ClassBuilder> for Member {
    fn from(builder: ClassBuilder) -> Self {
        Member::builder(builder)
    }
}

fn downcast_node<T: Into<Node> + 'static>(value: Box<dyn Any>) -> Result<Node, Box<dyn Any>> {
    value.downcast::<T>().map(|node| (*node).into())
}

/// Accepts untyped values, e.g. members collected from a plugin or a script
/// binding. Anything other than a node or a builder is rejected.
impl TryFrom<Box<dyn Any>> for Member {
    type Error = BuilderError;

    fn try_from(value: Box<dyn Any>) -> Result<Self, Self::Error> {
        downcast_node::<Node>(value)
            .or_else(downcast_node::<TraitUse>)
            .or_else(downcast_node::<ClassConst>)
            .or_else(downcast_node::<Property>)
            .or_else(downcast_node::<ClassMethod>)
            .or_else(downcast_node::<ClassDeclaration>)
            .map(Member::Node)
            .or_else(|value| value.downcast::<Member>().map(|member| *member))
            .or_else(|value| {
                value
                    .downcast::<Box<dyn Builder>>()
                    .map(|builder| Member::Builder(*builder))
            })
            .or_else(|value| {
                value
                    .downcast::<ClassBuilder>()
                    .map(|builder| Member::Builder(builder))
            })
            .map_err(|_| BuilderError::InvalidMemberArgument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Expression, NodeKind};

    struct MethodBuilder(&'static str);

    impl Builder for MethodBuilder {
        fn get_node(&self) -> Node {
            ClassMethod::public(self.0).into()
        }
    }

    #[test]
    fn node_passes_through() {
        let node = Node::from(Property::public("x"));
        assert_eq!(Member::from(node.clone()).into_node(), node);
    }

    #[test]
    fn builder_is_asked_for_its_node() {
        let node = Member::builder(MethodBuilder("bar")).into_node();
        assert_eq!(node, Node::from(ClassMethod::public("bar")));
    }

    #[test]
    fn untyped_node_and_builder_are_accepted() {
        let node: Box<dyn Any> = Box::new(Node::echo(["a"]));
        let member = Member::try_from(node).unwrap();
        assert_eq!(member.into_node().kind(), NodeKind::Echo);

        let property: Box<dyn Any> = Box::new(Property::public("x"));
        let member = Member::try_from(property).unwrap();
        assert_eq!(member.into_node().kind(), NodeKind::Property);

        let builder: Box<dyn Any> = Box::new(ClassBuilder::new("Foo"));
        let member = Member::try_from(builder).unwrap();
        assert_eq!(member.into_node().kind(), NodeKind::Class);

        let boxed: Box<dyn Builder> = Box::new(MethodBuilder("baz"));
        let member = Member::try_from(Box::new(boxed) as Box<dyn Any>).unwrap();
        assert_eq!(member.into_node().kind(), NodeKind::ClassMethod);
    }

    #[test]
    fn untyped_other_values_are_rejected() {
        let values: Vec<Box<dyn Any>> = vec![
            Box::new("Foo"),
            Box::new(42),
            Box::new(Expression::int(1)),
            Box::new(crate::syntax::Name::from("Foo")),
        ];
        for value in values {
            assert_eq!(
                Member::try_from(value).unwrap_err(),
                BuilderError::InvalidMemberArgument
            );
        }
    }
}
