use derivative::Derivative;
use ordered_float::NotNan;

mod classes;
mod members;
mod name;

pub use name::*;

pub type Float = NotNan<f64>;

use std::fmt::Display;

use crate::positioned::SourcePos;

pub use self::{
    classes::{ClassDeclaration, ClassModifier},
    members::{
        ClassConst, ClassMethod, Const, MemberFlags, Param, Property, PropertyProperty, TraitUse,
        Visibility,
    },
};

/// A statement node.
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq)]
pub enum Node {
    TraitUse(TraitUse),
    ClassConst(ClassConst),
    Property(Property),
    ClassMethod(ClassMethod),
    Class(ClassDeclaration),
    Expression {
        expression: Expression,
        #[derivative(PartialEq = "ignore")]
        info: SourcePos,
    },
    Echo {
        expressions: Vec<Expression>,
        #[derivative(PartialEq = "ignore")]
        info: SourcePos,
    },
    Return {
        expression: Option<Expression>,
        #[derivative(PartialEq = "ignore")]
        info: SourcePos,
    },
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::TraitUse(_) => NodeKind::TraitUse,
            Node::ClassConst(_) => NodeKind::ClassConst,
            Node::Property(_) => NodeKind::Property,
            Node::ClassMethod(_) => NodeKind::ClassMethod,
            Node::Class(_) => NodeKind::Class,
            Node::Expression { .. } => NodeKind::Expression,
            Node::Echo { .. } => NodeKind::Echo,
            Node::Return { .. } => NodeKind::Return,
        }
    }

    pub fn expression(expression: impl Into<Expression>) -> Node {
        Node::Expression {
            expression: expression.into(),
            info: SourcePos::UnknownPosition,
        }
    }

    pub fn echo<I, E>(expressions: I) -> Node
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        Node::Echo {
            expressions: expressions.into_iter().map(Into::into).collect(),
            info: SourcePos::UnknownPosition,
        }
    }

    pub fn return_(expression: Option<Expression>) -> Node {
        Node::Return {
            expression,
            info: SourcePos::UnknownPosition,
        }
    }
}

impl From<TraitUse> for Node {
    fn from(value: TraitUse) -> Self {
        Node::TraitUse(value)
    }
}

impl From<ClassConst> for Node {
    fn from(value: ClassConst) -> Self {
        Node::ClassConst(value)
    }
}

impl From<Property> for Node {
    fn from(value: Property) -> Self {
        Node::Property(value)
    }
}

impl From<ClassMethod> for Node {
    fn from(value: ClassMethod) -> Self {
        Node::ClassMethod(value)
    }
}

impl From<ClassDeclaration> for Node {
    fn from(value: ClassDeclaration) -> Self {
        Node::Class(value)
    }
}

/// Discriminator of [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    TraitUse,
    ClassConst,
    Property,
    ClassMethod,
    Class,
    Expression,
    Echo,
    Return,
}

impl NodeKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::TraitUse => "Stmt_TraitUse",
            NodeKind::ClassConst => "Stmt_ClassConst",
            NodeKind::Property => "Stmt_Property",
            NodeKind::ClassMethod => "Stmt_ClassMethod",
            NodeKind::Class => "Stmt_Class",
            NodeKind::Expression => "Stmt_Expression",
            NodeKind::Echo => "Stmt_Echo",
            NodeKind::Return => "Stmt_Return",
        }
    }

    /// Whether a node of this kind may appear in a class body.
    pub fn is_class_member(&self) -> bool {
        matches!(
            self,
            NodeKind::TraitUse | NodeKind::ClassConst | NodeKind::Property | NodeKind::ClassMethod
        )
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Lit { lit: Lit },
    ConstFetch { name: Name },
    Var { var: String },
}

impl Expression {
    pub fn int(int_value: i64) -> Expression {
        Expression::Lit {
            lit: Lit::IntLit { int_value },
        }
    }

    pub fn string(string_value: impl Into<String>) -> Expression {
        Expression::Lit {
            lit: Lit::StringLit {
                string_value: string_value.into(),
            },
        }
    }

    pub fn null() -> Expression {
        Expression::Lit { lit: Lit::NullLit }
    }

    pub fn const_fetch(name: impl Into<Name>) -> Expression {
        Expression::ConstFetch { name: name.into() }
    }

    pub fn var(var: impl Into<String>) -> Expression {
        Expression::Var { var: var.into() }
    }
}

impl From<i64> for Expression {
    fn from(int_value: i64) -> Self {
        Expression::int(int_value)
    }
}

impl From<i32> for Expression {
    fn from(int_value: i32) -> Self {
        Expression::int(int_value.into())
    }
}

impl From<bool> for Expression {
    fn from(bool_value: bool) -> Self {
        Expression::Lit {
            lit: Lit::BoolLit { bool_value },
        }
    }
}

impl From<Float> for Expression {
    fn from(float_value: Float) -> Self {
        Expression::Lit {
            lit: Lit::FloatLit { float_value },
        }
    }
}

impl From<&str> for Expression {
    fn from(string_value: &str) -> Self {
        Expression::string(string_value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lit {
    NullLit,
    BoolLit { bool_value: bool },
    IntLit { int_value: i64 },
    FloatLit { float_value: Float },
    StringLit { string_value: String },
}
