//! Errors raised while compiling an accessor.

use std::collections::TryReserveError;

use ra_parse::{ParseError, Span};

use crate::AccessorKind;

/// Error during accessor construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An owned string or list could not be allocated.
    Alloc(TryReserveError),
    /// The grammar rejected the expression.
    Syntax(ParseError),
    /// A span does not select valid text of the input.
    InvalidSpan {
        /// The offending span.
        span: Span,
        /// Length of the input in bytes.
        len: usize,
    },
    /// The expression is longer than the grammar's spans can address.
    TooLong {
        /// Length of the input in bytes.
        len: usize,
        /// Longest accepted input in bytes.
        max: usize,
    },
    /// Finalization found no key, or a kind that is not `String` or `Keymap`.
    Incomplete(AccessorKind),
}

impl BuildError {
    /// The underlying parse error, if this is a syntax error.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            BuildError::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::Alloc(e) => write!(f, "allocation failed: {}", e),
            BuildError::Syntax(e) => write!(f, "{}", e),
            BuildError::InvalidSpan { span, len } => write!(
                f,
                "span {}..{} does not select text in a {}-byte input",
                span.start, span.end, len
            ),
            BuildError::TooLong { len, max } => write!(
                f,
                "expression is {} bytes, longer than the {}-byte limit",
                len, max
            ),
            BuildError::Incomplete(kind) => write!(
                f,
                "incomplete accessor: finished with kind {} and no usable key",
                kind
            ),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Alloc(e) => Some(e),
            BuildError::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TryReserveError> for BuildError {
    fn from(e: TryReserveError) -> Self {
        BuildError::Alloc(e)
    }
}

impl From<ParseError> for BuildError {
    fn from(e: ParseError) -> Self {
        BuildError::Syntax(e)
    }
}
