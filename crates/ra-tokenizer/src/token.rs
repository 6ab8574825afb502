//! Token types for the record accessor tokenizer.

use crate::Span;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structural tokens
    /// `$`
    Dollar,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    // Value tokens
    /// Key name: `kubernetes`, `log.level`, `_id`
    Identifier,
    /// Run of ASCII digits: `0`, `42`
    Integer,
    /// Quoted string: `'labels'` or `"labels"`
    QuotedString,

    /// Spaces, tabs and newlines
    Whitespace,

    // Special tokens
    /// End of input
    Eof,
    /// Lexer error (unterminated string or unrecognized input)
    Error,
}

impl TokenKind {
    /// Whether this token is trivia.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

/// A token with its kind, span, and source text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span in the source text.
    pub span: Span,
    /// The source text of this token.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: &'src str) -> Self {
        Self { kind, span, text }
    }

    /// Text between the quotes of a [`TokenKind::QuotedString`].
    ///
    /// Escape sequences are left as written. Returns `None` for any other kind.
    pub fn unquoted(&self) -> Option<&'src str> {
        if self.kind != TokenKind::QuotedString || self.text.len() < 2 {
            return None;
        }
        Some(&self.text[1..self.text.len() - 1])
    }

    /// Span of [`Token::unquoted`] in the source text.
    pub fn unquoted_span(&self) -> Option<Span> {
        self.unquoted()
            .map(|_| Span::new(self.span.start + 1, self.span.end - 1))
    }
}
