//! Accessor builder driven by grammar events.

use ra_parse::{Event, ParseCallback};
use tracing::trace;

use crate::{Accessor, AccessorKind, BuildError, KeyNode, StringList, make_key};

/// An accessor under construction.
///
/// The grammar reports keys and subkeys through [`ParseCallback`]; subkeys
/// collect in a working list that [`AccessorBuilder::finish`] moves into the
/// key. Dropping a builder at any point releases everything it holds.
#[derive(Debug, Default)]
pub struct AccessorBuilder {
    kind: AccessorKind,
    key: Option<KeyNode>,
    working: StringList,
    /// First builder failure, which stopped the parse.
    error: Option<BuildError>,
}

impl AccessorBuilder {
    /// Create an empty builder. Does not allocate.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shape decided so far.
    pub fn kind(&self) -> AccessorKind {
        self.kind
    }

    /// Decide the shape.
    pub fn set_kind(&mut self, kind: AccessorKind) {
        self.kind = kind;
    }

    /// The key, if one was set.
    pub fn key(&self) -> Option<&KeyNode> {
        self.key.as_ref()
    }

    /// Set the key, releasing any previous one.
    pub fn set_key(&mut self, key: KeyNode) {
        self.key = Some(key);
    }

    /// Subkeys collected so far.
    pub fn working(&self) -> &StringList {
        &self.working
    }

    /// Append a copy of `token` to the working subkey list.
    ///
    /// Earlier subkeys stay in place if this fails.
    pub fn append_subkey(&mut self, token: &str) -> Result<(), BuildError> {
        self.working.try_push(token)?;
        Ok(())
    }

    /// The builder failure that stopped the last parse, if any.
    pub(crate) fn take_error(&mut self) -> Option<BuildError> {
        self.error.take()
    }

    /// Finalize into an [`Accessor`].
    ///
    /// For a keymap the working list becomes the key's subkeys; for a string
    /// it is discarded. A builder whose kind is unset, or that has no key, is
    /// [`BuildError::Incomplete`].
    pub fn finish(self) -> Result<Accessor, BuildError> {
        match (self.kind, self.key) {
            (AccessorKind::String, Some(key)) => Ok(Accessor::String(key)),
            (AccessorKind::Keymap, Some(mut key)) => {
                key.subkeys = Some(self.working);
                Ok(Accessor::Keymap(key))
            }
            (kind, _) => Err(BuildError::Incomplete(kind)),
        }
    }
}

impl<'src> ParseCallback<'src> for AccessorBuilder {
    fn event(&mut self, event: Event<'src>) -> bool {
        trace!(?event, "build");
        let result = match event {
            Event::Key { name, .. } => make_key(name).map(|key| {
                self.set_key(key);
                self.set_kind(AccessorKind::Keymap);
            }),
            Event::Subkey { name, .. } => self.append_subkey(name),
        };
        match result {
            Ok(()) => true,
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }
}
