use crate::syntax::{ClassConst, ClassDeclaration, ClassMethod, Name, Node, Property, TraitUse};

#[derive(Debug, Clone, Copy, Default)]
pub enum SourcePos {
    #[default]
    UnknownPosition,
    SourcePos {
        line: usize,
        col: usize,
    },
}

impl SourcePos {
    pub fn new(line: usize, col: usize) -> SourcePos {
        SourcePos::SourcePos { line, col }
    }
}

pub trait WithPosition {
    fn get_position(&self) -> SourcePos;
}

impl WithPosition for Name {
    fn get_position(&self) -> SourcePos {
        self.info()
    }
}

impl WithPosition for TraitUse {
    fn get_position(&self) -> SourcePos {
        self.info
    }
}

impl WithPosition for ClassConst {
    fn get_position(&self) -> SourcePos {
        self.info
    }
}

impl WithPosition for Property {
    fn get_position(&self) -> SourcePos {
        self.info
    }
}

impl WithPosition for ClassMethod {
    fn get_position(&self) -> SourcePos {
        self.info
    }
}

impl WithPosition for ClassDeclaration {
    fn get_position(&self) -> SourcePos {
        self.info
    }
}

impl WithPosition for Node {
    fn get_position(&self) -> SourcePos {
        match self {
            Node::TraitUse(trait_use) => trait_use.get_position(),
            Node::ClassConst(class_const) => class_const.get_position(),
            Node::Property(property) => property.get_position(),
            Node::ClassMethod(method) => method.get_position(),
            Node::Class(class) => class.get_position(),
            Node::Expression { info, .. } => *info,
            Node::Echo { info, .. } => *info,
            Node::Return { info, .. } => *info,
        }
    }
}
