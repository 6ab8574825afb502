//! Tokenizer for record accessor expressions.

use crate::{Span, Token, TokenKind};
use tracing::trace;

/// A tokenizer that produces tokens from record accessor source text.
#[derive(Clone)]
pub struct Tokenizer<'src> {
    /// The source text being tokenized.
    source: &'src str,
    /// The remaining source text (suffix of `source`).
    remaining: &'src str,
    /// Current byte position in `source`.
    pos: u32,
}

impl<'src> Tokenizer<'src> {
    /// Create a new tokenizer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            remaining: source,
            pos: 0,
        }
    }

    /// Get the current byte position.
    #[inline]
    pub fn position(&self) -> u32 {
        self.pos
    }

    /// Check if we're at the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.remaining.is_empty()
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    /// Advance by one character and return it.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8() as u32;
        self.remaining = &self.remaining[c.len_utf8()..];
        Some(c)
    }

    /// Advance while `pred` holds.
    #[inline]
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Create a token from the given start position to current position.
    fn token(&self, kind: TokenKind, start: u32) -> Token<'src> {
        let span = Span::new(start, self.pos);
        let text = &self.source[start as usize..self.pos as usize];
        trace!("Token {:?} at {:?}: {:?}", kind, span, text);
        Token::new(kind, span, text)
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        let start = self.pos;
        let Some(c) = self.advance() else {
            return self.token(TokenKind::Eof, start);
        };

        match c {
            '$' => self.token(TokenKind::Dollar, start),
            '[' => self.token(TokenKind::LBracket, start),
            ']' => self.token(TokenKind::RBracket, start),
            '\'' | '"' => self.tokenize_quoted_string(c, start),
            ' ' | '\t' | '\r' | '\n' => {
                self.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
                self.token(TokenKind::Whitespace, start)
            }
            _ if is_identifier_start(c) => {
                self.advance_while(is_identifier_char);
                self.token(TokenKind::Identifier, start)
            }
            _ if c.is_ascii_digit() => {
                self.advance_while(|c| c.is_ascii_digit());
                self.token(TokenKind::Integer, start)
            }
            _ => self.token(TokenKind::Error, start),
        }
    }

    /// Tokenize a quoted string whose opening `quote` was already consumed.
    fn tokenize_quoted_string(&mut self, quote: char, start: u32) -> Token<'src> {
        loop {
            match self.advance() {
                None => return self.token(TokenKind::Error, start),
                Some('\\') => {
                    // the escaped character is kept verbatim, but never closes the string
                    self.advance();
                }
                Some(c) if c == quote => return self.token(TokenKind::QuotedString, start),
                Some(_) => {}
            }
        }
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

/// Check if a character can start an identifier.
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}
