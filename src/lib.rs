mod language;

mod error;
mod options;
mod positioned;

pub use language::*;

pub use error::BuilderError;
pub use options::LogOptions;
pub use positioned::{SourcePos, WithPosition};
