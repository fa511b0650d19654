use slog::{debug, o, Logger};

use crate::{
    error::BuilderError,
    positioned::SourcePos,
    syntax::{ClassDeclaration, ClassModifier, Name, Node},
};

use super::{Builder, Member};
use std::fmt::Debug;

/// Builds a [`ClassDeclaration`] piece by piece.
///
/// Members may be added in any order; the produced body always lists trait
/// uses first, then constants, properties and finally methods. Within each of
/// these groups the insertion order is kept.
///
/// ```
/// use lib::{ClassBuilder, ClassConst, ClassMethod, Property};
///
/// let class = ClassBuilder::new("Foo")
///     .extend("Bar")
///     .implement(["Iterable", "Countable"])
///     .add_member(Property::public("x"))?
///     .add_member(ClassMethod::public("bar"))?
///     .add_member(ClassConst::single("C", 1))?
///     .build();
///
/// assert_eq!(class.extends.as_ref().unwrap(), &"Bar");
/// assert_eq!(class.stmts.len(), 3);
/// # Ok::<(), lib::BuilderError>(())
/// ```
#[derive(Clone)]
pub struct ClassBuilder {
    name: Name,

    extends: Option<Name>,
    implements: Vec<Name>,
    modifier: ClassModifier,

    uses: Vec<Node>,
    constants: Vec<Node>,
    properties: Vec<Node>,
    methods: Vec<Node>,

    logger: Logger,
}

impl ClassBuilder {
    pub fn new(name: impl Into<Name>) -> ClassBuilder {
        ClassBuilder {
            name: name.into(),
            extends: None,
            implements: Vec::new(),
            modifier: ClassModifier::None,
            uses: Vec::new(),
            constants: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            logger: Logger::root(slog::Discard, o!()),
        }
    }

    pub fn with_logger(&mut self, logger: Logger) -> &mut Self {
        self.logger = logger.new(o!("class" => self.name.to_string()));
        self
    }

    /// Sets the parent class, replacing a previously set one.
    pub fn extend(&mut self, class: impl Into<Name>) -> &mut Self {
        self.extends = Some(class.into());
        self
    }

    /// Appends interfaces, duplicates are kept.
    pub fn implement<I, N>(&mut self, interfaces: I) -> &mut Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Name>,
    {
        self.implements
            .extend(interfaces.into_iter().map(Into::into));
        self
    }

    // Abstract and final exclude each other, the last call wins.
    pub fn make_abstract(&mut self) -> &mut Self {
        self.modifier = ClassModifier::Abstract;
        self
    }

    pub fn make_final(&mut self) -> &mut Self {
        self.modifier = ClassModifier::Final;
        self
    }

    /// Adds a trait use, constant, property or method.
    ///
    /// Builders are turned into nodes first. Any other kind of node cannot
    /// appear in a class body and is rejected without touching the builder.
    pub fn add_member(&mut self, member: impl Into<Member>) -> Result<&mut Self, BuilderError> {
        let node = member.into().into_node();
        let kind = node.kind();

        let target = match node {
            Node::TraitUse(_) => &mut self.uses,
            Node::ClassConst(_) => &mut self.constants,
            Node::Property(_) => &mut self.properties,
            Node::ClassMethod(_) => &mut self.methods,
            Node::Class(_) | Node::Expression { .. } | Node::Echo { .. } | Node::Return { .. } => {
                debug!(self.logger, "rejected member of type {}", kind);
                return Err(BuilderError::UnexpectedNodeKind(kind));
            }
        };

        target.push(node);
        debug!(self.logger, "added member of type {}", kind; "count" => target.len());

        Ok(self)
    }

    /// Adds members in order, stopping at the first rejected one.
    /// Members added before the failure are kept.
    pub fn add_members<I, M>(&mut self, members: I) -> Result<&mut Self, BuilderError>
    where
        I: IntoIterator<Item = M>,
        M: Into<Member>,
    {
        for member in members {
            self.add_member(member)?;
        }
        Ok(self)
    }

    pub fn build(&self) -> ClassDeclaration {
        let stmts: Vec<Node> = self
            .uses
            .iter()
            .chain(&self.constants)
            .chain(&self.properties)
            .chain(&self.methods)
            .cloned()
            .collect();

        debug!(self.logger, "building class {}", self.name; "members" => stmts.len());

        ClassDeclaration {
            name: self.name.clone(),
            modifier: self.modifier,
            extends: self.extends.clone(),
            implements: self.implements.clone(),
            stmts,
            info: SourcePos::UnknownPosition,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn extends(&self) -> Option<&Name> {
        self.extends.as_ref()
    }

    pub fn implements(&self) -> &[Name] {
        &self.implements
    }

    pub fn modifier(&self) -> ClassModifier {
        self.modifier
    }
}

impl Builder for ClassBuilder {
    fn get_node(&self) -> Node {
        Node::Class(self.build())
    }
}

impl Debug for ClassBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassBuilder")
            .field("name", &self.name)
            .field("extends", &self.extends)
            .field("implements", &self.implements)
            .field("modifier", &self.modifier)
            .field("uses", &self.uses)
            .field("constants", &self.constants)
            .field("properties", &self.properties)
            .field("methods", &self.methods)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{ClassConst, ClassMethod, Expression, NodeKind, Property, TraitUse};

    #[test]
    fn new_builder_is_empty() {
        let class = ClassBuilder::new("Foo").build();

        assert_eq!(class.name, "Foo");
        assert_eq!(class.modifier, ClassModifier::None);
        assert_eq!(class.extends, None);
        assert!(class.implements.is_empty());
        assert!(class.stmts.is_empty());
    }

    #[test]
    fn extend_overwrites() {
        let mut builder = ClassBuilder::new("Foo");
        builder.extend("Bar").extend(Name::from("Baz"));

        assert_eq!(builder.extends(), Some(&Name::from("Baz")));
    }

    #[test]
    fn implement_accumulates() {
        let mut builder = ClassBuilder::new("Foo");
        builder.implement(["A"]).implement(["B", "A"]);

        assert_eq!(builder.implements(), &["A", "B", "A"].map(Name::from));
    }

    #[test]
    fn last_modifier_wins() {
        let mut builder = ClassBuilder::new("Foo");
        builder.make_final().make_abstract();
        assert_eq!(builder.modifier(), ClassModifier::Abstract);

        builder.make_final();
        assert_eq!(builder.build().modifier, ClassModifier::Final);
    }

    #[test]
    fn members_are_grouped_by_kind() {
        let mut builder = ClassBuilder::new("Foo");
        builder
            .add_members([
                Node::from(ClassMethod::public("m1")),
                Node::from(Property::public("p1")),
                Node::from(ClassConst::single("C1", 1)),
                Node::from(TraitUse::new(["T1"])),
                Node::from(ClassMethod::public("m2")),
                Node::from(ClassConst::single("C2", 2)),
                Node::from(TraitUse::new(["T2"])),
                Node::from(Property::public("p2")),
            ])
            .unwrap();

        let expected: Vec<Node> = vec![
            TraitUse::new(["T1"]).into(),
            TraitUse::new(["T2"]).into(),
            ClassConst::single("C1", 1).into(),
            ClassConst::single("C2", 2).into(),
            Property::public("p1").into(),
            Property::public("p2").into(),
            ClassMethod::public("m1").into(),
            ClassMethod::public("m2").into(),
        ];
        assert_eq!(builder.build().stmts, expected);
    }

    #[test]
    fn rejected_member_leaves_builder_untouched() {
        let mut builder = ClassBuilder::new("Foo");
        builder.add_member(Property::public("x")).unwrap();
        let before = builder.build();

        let rejected = [
            Node::expression(Expression::var("a")),
            Node::echo(["a"]),
            Node::return_(None),
            Node::from(ClassBuilder::new("Inner").build()),
        ];
        for node in rejected {
            let kind = node.kind();
            assert_eq!(
                builder.add_member(node).unwrap_err(),
                BuilderError::UnexpectedNodeKind(kind)
            );
        }

        assert_eq!(builder.build(), before);
    }

    #[test]
    fn nested_class_builder_is_rejected() {
        let mut builder = ClassBuilder::new("Outer");

        let err = builder.add_member(ClassBuilder::new("Inner")).unwrap_err();
        assert_eq!(err, BuilderError::UnexpectedNodeKind(NodeKind::Class));
        assert_eq!(err.to_string(), "Unexpected node of type \"Stmt_Class\"");
    }

    #[test]
    fn add_members_stops_at_first_error() {
        let mut builder = ClassBuilder::new("Foo");

        let result = builder.add_members([
            Node::from(Property::public("a")),
            Node::echo(["oops"]),
            Node::from(Property::public("b")),
        ]);
        assert!(result.is_err());

        let expected: Vec<Node> = vec![Property::public("a").into()];
        assert_eq!(builder.build().stmts, expected);
    }

    #[test]
    fn build_does_not_consume() {
        let mut builder = ClassBuilder::new("Foo");
        builder.add_member(ClassMethod::public("a")).unwrap();
        let first = builder.build();
        assert_eq!(first, builder.build());

        builder.add_member(ClassMethod::public("b")).unwrap();
        assert_eq!(first.stmts.len(), 1);
        assert_eq!(builder.build().stmts.len(), 2);
    }

    #[test]
    fn builder_produces_class_node() {
        let mut builder = ClassBuilder::new("Foo");
        builder.make_abstract();

        match builder.get_node() {
            Node::Class(class) => {
                assert_eq!(class.name, "Foo");
                assert!(class.is_abstract());
            }
            other => panic!("expected a class node, got {:?}", other),
        }
    }
}
