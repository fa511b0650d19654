use thiserror::Error;

use crate::syntax::NodeKind;

/// Misuse of a declaration builder. These indicate a bug in the calling code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error("Expected node or builder object")]
    InvalidMemberArgument,

    #[error("Unexpected node of type \"{0}\"")]
    UnexpectedNodeKind(NodeKind),
}
