//! Callback-driven parser for record accessor expressions.

use tracing::trace;

use crate::{Event, ParseCallback, ParseError, ParseErrorKind, Span, Token, TokenKind, Tokenizer};

/// Parser for a single record accessor expression.
///
/// The parser owns the scanner state for one buffer. Dropping it releases
/// that state, whether or not [`Parser::parse`] succeeded.
#[derive(Clone)]
pub struct Parser<'src> {
    tokenizer: Tokenizer<'src>,
}

impl<'src> Parser<'src> {
    /// Create a new parser for the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
        }
    }

    /// Parse the expression, reporting each key and subkey to `callback`.
    ///
    /// Events already delivered before an error are not retracted; callers
    /// that need all-or-nothing semantics must discard their state on `Err`.
    pub fn parse<C: ParseCallback<'src>>(mut self, callback: &mut C) -> Result<(), ParseError> {
        let dollar = self.advance();
        match dollar.kind {
            TokenKind::Dollar => {}
            TokenKind::Error => return Err(lexer_error(&dollar)),
            _ => return Err(ParseError::new(ParseErrorKind::ExpectedDollar, dollar.span)),
        }

        let key = self.advance();
        match key.kind {
            TokenKind::Identifier => emit(
                callback,
                Event::Key {
                    span: key.span,
                    name: key.text,
                },
            )?,
            TokenKind::Error => return Err(lexer_error(&key)),
            _ => return Err(ParseError::new(ParseErrorKind::ExpectedKey, key.span)),
        }

        loop {
            let token = self.advance();
            match token.kind {
                TokenKind::Eof => return Ok(()),
                TokenKind::LBracket => self.parse_subkey(token.span, callback)?,
                TokenKind::Error => return Err(lexer_error(&token)),
                _ => {
                    return Err(ParseError::new(ParseErrorKind::TrailingContent, token.span));
                }
            }
        }
    }

    /// Convenience: parse and collect all events.
    pub fn parse_to_vec(self) -> Result<Vec<Event<'src>>, ParseError> {
        let mut events = Vec::new();
        self.parse(&mut events)?;
        Ok(events)
    }

    /// Parse the rest of a `['subkey']` group whose `[` was already consumed.
    fn parse_subkey<C: ParseCallback<'src>>(
        &mut self,
        open: Span,
        callback: &mut C,
    ) -> Result<(), ParseError> {
        let token = self.advance();
        let (span, name) = match (token.unquoted_span(), token.unquoted()) {
            (Some(span), Some(name)) => (span, name),
            _ if token.kind == TokenKind::Error => return Err(lexer_error(&token)),
            _ => return Err(ParseError::new(ParseErrorKind::ExpectedSubkey, token.span)),
        };

        let close = self.advance();
        match close.kind {
            TokenKind::RBracket => emit(callback, Event::Subkey { span, name }),
            TokenKind::Error => Err(lexer_error(&close)),
            _ => Err(ParseError::new(ParseErrorKind::UnclosedBracket, open)),
        }
    }

    /// Consume the next non-whitespace token.
    fn advance(&mut self) -> Token<'src> {
        loop {
            let token = self.tokenizer.next_token();
            if !token.kind.is_trivia() {
                return token;
            }
        }
    }
}

fn emit<'src, C: ParseCallback<'src>>(
    callback: &mut C,
    event: Event<'src>,
) -> Result<(), ParseError> {
    trace!(?event, "emit");
    let span = event.span();
    if callback.event(event) {
        Ok(())
    } else {
        Err(ParseError::new(ParseErrorKind::Aborted, span))
    }
}

/// Classify a [`TokenKind::Error`] token.
fn lexer_error(token: &Token<'_>) -> ParseError {
    let kind = if token.text.starts_with(['\'', '"']) {
        ParseErrorKind::UnterminatedString
    } else {
        ParseErrorKind::UnexpectedCharacter
    };
    ParseError::new(kind, token.span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    fn parse(source: &str) -> Result<Vec<Event<'_>>, ParseError> {
        Parser::new(source).parse_to_vec()
    }

    fn names(source: &str) -> Vec<&str> {
        parse(source).unwrap().iter().map(|e| e.name()).collect()
    }

    fn error_kind(source: &str) -> ParseErrorKind {
        parse(source).unwrap_err().kind
    }

    #[test]
    fn test_key_only() {
        let events = parse("$log").unwrap();
        assert_eq!(
            events,
            vec![Event::Key {
                span: Span::new(1, 4),
                name: "log"
            }]
        );
    }

    #[test]
    fn test_key_with_subkeys() {
        let events = parse("$kubernetes['labels']['app']").unwrap();
        assert_eq!(
            events,
            vec![
                Event::Key {
                    span: Span::new(1, 11),
                    name: "kubernetes"
                },
                Event::Subkey {
                    span: Span::new(13, 19),
                    name: "labels"
                },
                Event::Subkey {
                    span: Span::new(23, 26),
                    name: "app"
                },
            ]
        );
    }

    #[test]
    fn test_double_quotes_and_whitespace() {
        assert_eq!(
            names(" $kubernetes [ \"labels\" ] ['app'] "),
            vec!["kubernetes", "labels", "app"]
        );
    }

    #[test]
    fn test_subkey_text_is_verbatim() {
        assert_eq!(names(r"$a['x\'y']['*']"), vec!["a", r"x\'y", "*"]);
    }

    #[test]
    fn test_duplicate_subkeys_are_kept() {
        assert_eq!(names("$a['b']['b']"), vec!["a", "b", "b"]);
    }

    #[test]
    fn test_empty_subkey() {
        assert_eq!(names("$a['']"), vec!["a", ""]);
    }

    #[test]
    fn test_missing_dollar() {
        assert_eq!(error_kind("log"), ParseErrorKind::ExpectedDollar);
        assert_eq!(error_kind(""), ParseErrorKind::ExpectedDollar);
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(error_kind("$"), ParseErrorKind::ExpectedKey);
        assert_eq!(error_kind("$['a']"), ParseErrorKind::ExpectedKey);
        assert_eq!(error_kind("$1"), ParseErrorKind::ExpectedKey);
    }

    #[test]
    fn test_index_is_not_a_subkey() {
        let error = parse("$a[0]").unwrap_err();
        assert_eq!(error.kind, ParseErrorKind::ExpectedSubkey);
        assert_eq!(error.span, Span::new(3, 4));
        assert_eq!(error_kind("$a[]"), ParseErrorKind::ExpectedSubkey);
        assert_eq!(error_kind("$a[b]"), ParseErrorKind::ExpectedSubkey);
    }

    #[test]
    fn test_unclosed_bracket_points_at_open() {
        let error = parse("$a['b' x").unwrap_err();
        assert_eq!(error.kind, ParseErrorKind::UnclosedBracket);
        assert_eq!(error.span, Span::new(2, 3));
    }

    #[test]
    fn test_trailing_content() {
        let error = parse("$a['b'] c").unwrap_err();
        assert_eq!(error.kind, ParseErrorKind::TrailingContent);
        assert_eq!(error.span, Span::new(8, 9));
        assert_eq!(error_kind("$a$b"), ParseErrorKind::TrailingContent);
    }

    #[test]
    fn test_lexer_errors() {
        assert_eq!(error_kind("$a['b"), ParseErrorKind::UnterminatedString);
        assert_eq!(error_kind("$a*"), ParseErrorKind::UnexpectedCharacter);
        assert_eq!(error_kind("#"), ParseErrorKind::UnexpectedCharacter);
    }

    #[test]
    fn test_events_before_error_are_delivered() {
        let mut events = Vec::new();
        let result = Parser::new("$k['a']['b']['c'] oops").parse(&mut events);
        assert_eq!(result.unwrap_err().kind, ParseErrorKind::TrailingContent);
        assert_eq!(events.len(), 4);
    }

    struct StopAfter(usize);

    impl<'src> ParseCallback<'src> for StopAfter {
        fn event(&mut self, _event: Event<'src>) -> bool {
            if self.0 == 0 {
                return false;
            }
            self.0 -= 1;
            true
        }
    }

    #[test]
    fn test_callback_can_abort() {
        let error = Parser::new("$k['a']['b']")
            .parse(&mut StopAfter(1))
            .unwrap_err();
        assert_eq!(error.kind, ParseErrorKind::Aborted);
        assert_eq!(error.span, Span::new(4, 5));
    }
}
