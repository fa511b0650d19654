use derivative::Derivative;

use crate::positioned::SourcePos;

use super::{Expression, Name, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// Modifiers of a property or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MemberFlags {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
}

impl MemberFlags {
    pub fn with_visibility(visibility: Visibility) -> MemberFlags {
        MemberFlags {
            visibility,
            ..MemberFlags::default()
        }
    }
}

/// `use A, B;` inside a class body.
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq)]
pub struct TraitUse {
    pub traits: Vec<Name>,

    #[derivative(PartialEq = "ignore")]
    pub info: SourcePos,
}

impl TraitUse {
    pub fn new<I, N>(traits: I) -> TraitUse
    where
        I: IntoIterator<Item = N>,
        N: Into<Name>,
    {
        TraitUse {
            traits: traits.into_iter().map(Into::into).collect(),
            info: SourcePos::UnknownPosition,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Const {
    pub name: String,
    pub value: Expression,
}

/// `const A = 1, B = 2;`
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq)]
pub struct ClassConst {
    pub consts: Vec<Const>,

    #[derivative(PartialEq = "ignore")]
    pub info: SourcePos,
}

impl ClassConst {
    pub fn single(name: impl Into<String>, value: impl Into<Expression>) -> ClassConst {
        ClassConst {
            consts: vec![Const {
                name: name.into(),
                value: value.into(),
            }],
            info: SourcePos::UnknownPosition,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyProperty {
    pub name: String,
    pub default: Option<Expression>,
}

/// `public $a = 1, $b;`
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq)]
pub struct Property {
    pub flags: MemberFlags,
    pub props: Vec<PropertyProperty>,

    #[derivative(PartialEq = "ignore")]
    pub info: SourcePos,
}

impl Property {
    pub fn public(name: impl Into<String>) -> Property {
        Property {
            flags: MemberFlags::default(),
            props: vec![PropertyProperty {
                name: name.into(),
                default: None,
            }],
            info: SourcePos::UnknownPosition,
        }
    }

    pub fn with_default(mut self, default: impl Into<Expression>) -> Property {
        let default = default.into();
        for prop in self.props.iter_mut() {
            prop.default = Some(default.clone());
        }
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.props.iter().map(|prop| prop.name.as_str())
    }
}

#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub type_: Option<Name>,
    pub default: Option<Expression>,
    pub by_ref: bool,
    pub variadic: bool,

    #[derivative(PartialEq = "ignore")]
    pub info: SourcePos,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Param {
        Param {
            name: name.into(),
            type_: None,
            default: None,
            by_ref: false,
            variadic: false,
            info: SourcePos::UnknownPosition,
        }
    }
}

/// A method. Abstract methods have no body (`stmts` is `None`).
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq)]
pub struct ClassMethod {
    pub flags: MemberFlags,
    pub by_ref: bool,
    pub name: String,
    pub params: Vec<Param>,
    pub stmts: Option<Vec<Node>>,

    #[derivative(PartialEq = "ignore")]
    pub info: SourcePos,
}

impl ClassMethod {
    pub fn public(name: impl Into<String>) -> ClassMethod {
        ClassMethod {
            flags: MemberFlags::default(),
            by_ref: false,
            name: name.into(),
            params: Vec::new(),
            stmts: Some(Vec::new()),
            info: SourcePos::UnknownPosition,
        }
    }

    pub fn is_abstract(&self) -> bool {
        self.flags.is_abstract
    }
}
