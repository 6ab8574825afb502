//! Key nodes: the addressable unit of an accessor.

use ra_parse::Span;

use crate::{BuildError, StringList, string_list::try_copy};

/// A key name plus, for nested access, its ordered subkeys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNode {
    pub(crate) name: String,
    pub(crate) subkeys: Option<StringList>,
}

impl KeyNode {
    /// The key name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The nested subkeys, `None` for a plain leaf key.
    pub fn subkeys(&self) -> Option<&StringList> {
        self.subkeys.as_ref()
    }
}

/// Create a leaf key from a copy of `name`.
pub fn make_key(name: &str) -> Result<KeyNode, BuildError> {
    Ok(KeyNode {
        name: try_copy(name)?,
        subkeys: None,
    })
}

/// Create a leaf key from the bytes `span` selects in `text`.
pub fn make_key_from_span(text: &str, span: Span) -> Result<KeyNode, BuildError> {
    let name = span.get(text).ok_or(BuildError::InvalidSpan {
        span,
        len: text.len(),
    })?;
    make_key(name)
}
