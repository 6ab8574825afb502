//! Grammar for record accessor expressions.
//!
//! The [`Parser`] consumes tokens from [`ra_tokenizer::Tokenizer`] and reports
//! what it recognizes to a [`ParseCallback`]. It never builds a tree itself:
//! whoever implements the callback decides what a key or a subkey turns into.
//!
//! ```text
//! accessor := '$' IDENTIFIER subkey* EOF
//! subkey   := '[' QUOTED_STRING ']'
//! ```

pub use ra_tokenizer::{
    Span, Token, TokenKind, Tokenizer, is_identifier_char, is_identifier_start,
};

mod callback;
pub use callback::ParseCallback;

mod event;
pub use event::Event;

mod diagnostic;
pub use diagnostic::{ParseError, ParseErrorKind};

mod parser;
pub use parser::Parser;
