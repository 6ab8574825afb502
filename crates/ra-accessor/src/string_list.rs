//! Ordered list of owned strings with fallible growth.

use std::collections::TryReserveError;

/// Copy `text` into a new `String`, reporting allocation failure instead of aborting.
pub(crate) fn try_copy(text: &str) -> Result<String, TryReserveError> {
    let mut owned = String::new();
    owned.try_reserve_exact(text.len())?;
    owned.push_str(text);
    Ok(owned)
}

/// An ordered, duplicate-tolerant sequence of owned strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringList {
    items: Vec<String>,
}

impl StringList {
    /// Create an empty list. Does not allocate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `item` at the end.
    ///
    /// On failure the list is left exactly as it was.
    pub fn try_push(&mut self, item: &str) -> Result<(), TryReserveError> {
        let item = try_copy(item)?;
        self.items.try_reserve(1)?;
        self.items.push(item);
        Ok(())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.items.iter().map(String::as_str)
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Consume the list and return its elements.
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.items
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}
