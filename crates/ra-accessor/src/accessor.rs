//! Compiled accessors and their debug rendering.

use std::io;

use crate::{KeyNode, StringList};

/// Shape of an accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessorKind {
    /// Not yet decided; only seen while building.
    #[default]
    Unset,
    /// A literal string.
    String,
    /// A key with nested subkeys.
    Keymap,
}

impl std::fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AccessorKind::Unset => "UNSET",
            AccessorKind::String => "STRING",
            AccessorKind::Keymap => "KEYMAP",
        })
    }
}

/// A compiled record accessor.
///
/// A `String` accessor never has subkeys; a `Keymap` accessor always has a
/// (possibly empty) subkey list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// Literal text, stored as the key name.
    String(KeyNode),
    /// A key path into a record.
    Keymap(KeyNode),
}

impl Accessor {
    /// The shape of this accessor.
    pub fn kind(&self) -> AccessorKind {
        match self {
            Accessor::String(_) => AccessorKind::String,
            Accessor::Keymap(_) => AccessorKind::Keymap,
        }
    }

    /// The key node.
    pub fn key(&self) -> &KeyNode {
        match self {
            Accessor::String(key) | Accessor::Keymap(key) => key,
        }
    }

    /// The literal text or key name.
    pub fn name(&self) -> &str {
        self.key().name()
    }

    /// Subkeys of a keymap accessor; always `None` for a string.
    pub fn subkeys(&self) -> Option<&StringList> {
        self.key().subkeys()
    }

    /// Whether this accessor addresses a record key.
    pub fn is_keymap(&self) -> bool {
        matches!(self, Accessor::Keymap(_))
    }

    /// Consume the accessor and return its key node.
    pub fn into_key(self) -> KeyNode {
        match self {
            Accessor::String(key) | Accessor::Keymap(key) => key,
        }
    }

    /// Write the debug rendering to standard error.
    pub fn dump(&self) {
        eprint!("{self}");
    }

    /// Write the debug rendering to `writer`.
    pub fn dump_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl std::fmt::Display for Accessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "type       : {}", self.kind())?;
        match self {
            Accessor::String(key) => writeln!(f, "string     : '{}'", key.name()),
            Accessor::Keymap(key) => {
                writeln!(f, "key name   : {}", key.name())?;
                for subkey in key.subkeys().into_iter().flatten() {
                    writeln!(f, " - subkey  : {}", subkey)?;
                }
                Ok(())
            }
        }
    }
}
