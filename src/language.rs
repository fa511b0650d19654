pub mod builder;

pub mod syntax;

pub use builder::*;

pub use syntax::*;
