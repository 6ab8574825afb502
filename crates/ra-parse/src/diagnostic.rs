//! Parse errors and their diagnostic rendering.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::Span;

/// Parse error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The expression does not start with `$`.
    ExpectedDollar,
    /// `$` is not followed by a key name.
    ExpectedKey,
    /// `[` is not followed by a quoted subkey.
    ExpectedSubkey,
    /// Missing `]` after a subkey.
    UnclosedBracket,
    /// Quoted string without its closing quote.
    UnterminatedString,
    /// Character that cannot start any token.
    UnexpectedCharacter,
    /// Input left over after the last subkey.
    TrailingContent,
    /// The callback refused an event.
    Aborted,
}

/// A parse error with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Source location.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Render this error with ariadne.
    ///
    /// Returns a string containing the formatted error message with source context.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        self.write_report(filename, source, &mut output);
        String::from_utf8(output).unwrap_or_else(|_| format!("{}", self))
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(&self, filename: &str, source: &str, writer: W) {
        let report = self.build_report(filename);
        let _ = report
            .finish()
            .write((filename, Source::from(source)), writer);
    }

    fn build_report<'a>(
        &self,
        filename: &'a str,
    ) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
        let range: std::ops::Range<usize> = self.span.into();
        let report = Report::build(ReportKind::Error, (filename, range.clone()))
            .with_message(self.kind.message());

        match self.kind {
            ParseErrorKind::ExpectedDollar => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("expected `$` here")
                        .with_color(Color::Red),
                )
                .with_help("record accessors start with `$`, e.g. `$log`"),

            ParseErrorKind::ExpectedKey => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("expected a key name here")
                        .with_color(Color::Red),
                )
                .with_help("key names must match [A-Za-z_][A-Za-z0-9_.-]*"),

            ParseErrorKind::ExpectedSubkey => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("expected a quoted subkey")
                        .with_color(Color::Red),
                )
                .with_help("subkeys are quoted: `$key['subkey']`"),

            ParseErrorKind::UnclosedBracket => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("bracket opened here")
                        .with_color(Color::Red),
                )
                .with_help("add a closing ']'"),

            ParseErrorKind::UnterminatedString => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("string starts here")
                        .with_color(Color::Red),
                )
                .with_help("add the matching closing quote"),

            ParseErrorKind::UnexpectedCharacter => report.with_label(
                Label::new((filename, range))
                    .with_message("not valid in a record accessor")
                    .with_color(Color::Red),
            ),

            ParseErrorKind::TrailingContent => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("unexpected content here")
                        .with_color(Color::Red),
                )
                .with_help("only `['subkey']` groups may follow the key"),

            ParseErrorKind::Aborted => report.with_label(
                Label::new((filename, range))
                    .with_message("rejected while building the accessor")
                    .with_color(Color::Red),
            ),
        }
    }
}

impl ParseErrorKind {
    fn message(&self) -> &'static str {
        match self {
            ParseErrorKind::ExpectedDollar => "expected `$`",
            ParseErrorKind::ExpectedKey => "expected key",
            ParseErrorKind::ExpectedSubkey => "expected subkey",
            ParseErrorKind::UnclosedBracket => "unclosed bracket",
            ParseErrorKind::UnterminatedString => "unterminated string",
            ParseErrorKind::UnexpectedCharacter => "unexpected character",
            ParseErrorKind::TrailingContent => "trailing content after accessor",
            ParseErrorKind::Aborted => "parse aborted",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.span.start)
    }
}

impl std::error::Error for ParseError {}
