use derivative::Derivative;

use crate::positioned::SourcePos;

use super::{ClassConst, ClassMethod, Name, Node, Property, TraitUse};

/// Class level modifier. Abstract and final are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassModifier {
    #[default]
    None,
    Abstract,
    Final,
}

#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq)]
pub struct ClassDeclaration {
    pub name: Name,
    pub modifier: ClassModifier,

    pub extends: Option<Name>,
    pub implements: Vec<Name>,

    /// Body, ordered as trait uses, constants, properties, methods.
    pub stmts: Vec<Node>,

    #[derivative(PartialEq = "ignore")]
    pub info: SourcePos,
}

impl ClassDeclaration {
    pub fn is_abstract(&self) -> bool {
        self.modifier == ClassModifier::Abstract
    }

    pub fn is_final(&self) -> bool {
        self.modifier == ClassModifier::Final
    }

    pub fn trait_uses(&self) -> impl Iterator<Item = &TraitUse> + '_ {
        self.stmts.iter().filter_map(|stmt| match stmt {
            Node::TraitUse(trait_use) => Some(trait_use),
            _ => None,
        })
    }

    pub fn constants(&self) -> impl Iterator<Item = &ClassConst> + '_ {
        self.stmts.iter().filter_map(|stmt| match stmt {
            Node::ClassConst(class_const) => Some(class_const),
            _ => None,
        })
    }

    pub fn properties(&self) -> impl Iterator<Item = &Property> + '_ {
        self.stmts.iter().filter_map(|stmt| match stmt {
            Node::Property(property) => Some(property),
            _ => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &ClassMethod> + '_ {
        self.stmts.iter().filter_map(|stmt| match stmt {
            Node::ClassMethod(method) => Some(method),
            _ => None,
        })
    }

    /// Method names are case-insensitive.
    pub fn find_method(&self, name: &str) -> Option<&ClassMethod> {
        self.methods()
            .find(|method| method.name.eq_ignore_ascii_case(name))
    }
}
