//! Event types emitted by the record accessor grammar.

use crate::Span;

/// Events emitted by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'src> {
    /// The top-level key after `$`.
    Key {
        /// Span of the identifier.
        span: Span,
        /// Key name as written.
        name: &'src str,
    },
    /// One `['...']` level below the key.
    Subkey {
        /// Span of the text between the quotes.
        span: Span,
        /// Subkey name without its quotes, escapes left untouched.
        name: &'src str,
    },
}

impl<'src> Event<'src> {
    /// Span of the text this event was produced from.
    pub fn span(&self) -> Span {
        match self {
            Event::Key { span, .. } | Event::Subkey { span, .. } => *span,
        }
    }

    /// The name carried by this event.
    pub fn name(&self) -> &'src str {
        match self {
            Event::Key { name, .. } | Event::Subkey { name, .. } => *name,
        }
    }
}
