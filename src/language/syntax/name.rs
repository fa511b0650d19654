use derivative::Derivative;
use itertools::Itertools;

use crate::positioned::SourcePos;

use std::{
    fmt::{Debug, Display},
    ops::Deref,
};

const NAMESPACE_SEPARATOR: char = '\\';

/// A (possibly qualified) name, e.g. `Foo` or `Vendor\Package\Foo`.
///
/// The raw text is kept verbatim, no identifier syntax is checked.
#[derive(Clone, Derivative)]
#[derivative(PartialEq, Hash, Eq)]
pub struct Name {
    name: String,

    #[derivative(PartialEq = "ignore")]
    #[derivative(Hash = "ignore")]
    info: SourcePos,
}

impl Debug for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl PartialEq<Name> for &str {
    fn eq(&self, other: &Name) -> bool {
        other.name == *self
    }
}

impl Name {
    pub fn with_pos(name: String, info: SourcePos) -> Name {
        Name { name, info }
    }

    pub fn with_unknown_pos(name: String) -> Name {
        Name {
            name,
            info: SourcePos::UnknownPosition,
        }
    }

    /// Joins namespace parts, `["Foo", "Bar"]` becomes `Foo\Bar`.
    pub fn from_parts<I, S>(parts: I) -> Name
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = parts
            .into_iter()
            .map(|part| part.as_ref().to_owned())
            .join(&NAMESPACE_SEPARATOR.to_string());
        Name::with_unknown_pos(name)
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn info(&self) -> SourcePos {
        self.info
    }

    /// The namespace parts, without a leading separator.
    pub fn parts(&self) -> impl Iterator<Item = &str> + '_ {
        self.name
            .trim_start_matches(NAMESPACE_SEPARATOR)
            .split(NAMESPACE_SEPARATOR)
    }

    /// Last part of the name, `Foo\Bar` gives `Bar`.
    pub fn last(&self) -> &str {
        self.parts().last().unwrap_or_default()
    }

    pub fn is_unqualified(&self) -> bool {
        !self.name.contains(NAMESPACE_SEPARATOR)
    }

    pub fn is_fully_qualified(&self) -> bool {
        self.name.starts_with(NAMESPACE_SEPARATOR)
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.name
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Name {
    fn from(other: &str) -> Self {
        Name::with_unknown_pos(other.to_owned())
    }
}

impl From<String> for Name {
    fn from(other: String) -> Self {
        Name::with_unknown_pos(other)
    }
}

impl From<&Name> for Name {
    fn from(other: &Name) -> Self {
        other.clone()
    }
}

impl From<Name> for String {
    fn from(other: Name) -> Self {
        other.name
    }
}
