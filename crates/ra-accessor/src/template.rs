//! Templates mixing literal text with `$key['subkey']` accessors.

use std::borrow::Cow;
use std::io;

use ra_parse::is_identifier_char;
use tracing::debug;

use crate::{
    Accessor, AccessorOptions, BuildError, compile_expression, compile_string, translate_env,
};

/// A template split into literal and key accessors, in source order.
///
/// `"pod=$kubernetes['pod_name']!"` becomes three parts: the literal `pod=`,
/// the keymap `kubernetes` / `pod_name`, and the literal `!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordAccessor {
    pattern: String,
    parts: Vec<Accessor>,
}

/// One piece of a template before compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Expression(&'a str),
}

impl RecordAccessor {
    /// Split and compile `pattern` with default options.
    pub fn new(pattern: &str) -> Result<Self, BuildError> {
        Self::with_options(pattern, &AccessorOptions::default())
    }

    /// Split and compile `pattern`.
    ///
    /// Fails if any part fails; no partially compiled template is returned.
    pub fn with_options(pattern: &str, options: &AccessorOptions) -> Result<Self, BuildError> {
        let pattern = if options.translate_env {
            translate_env(pattern, |name| std::env::var(name).ok())
        } else {
            Cow::Borrowed(pattern)
        };

        let mut parts = Vec::new();
        for segment in segments(&pattern) {
            let part = match segment {
                Segment::Literal(text) => compile_string(text)?,
                Segment::Expression(text) => compile_expression(text)?,
            };
            parts.try_reserve(1)?;
            parts.push(part);
        }

        debug!(pattern = %pattern, parts = parts.len(), "compiled record accessor");
        Ok(Self {
            pattern: pattern.into_owned(),
            parts,
        })
    }

    /// The pattern the parts were compiled from, after translation.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// All parts in source order.
    pub fn parts(&self) -> &[Accessor] {
        &self.parts
    }

    /// Whether the template has no key accessors at all.
    pub fn is_static(&self) -> bool {
        !self.parts.iter().any(Accessor::is_keymap)
    }

    /// The key accessors, in source order.
    pub fn keys(&self) -> impl Iterator<Item = &Accessor> {
        self.parts.iter().filter(|part| part.is_keymap())
    }

    /// Write the debug rendering of every part to standard error.
    pub fn dump(&self) {
        eprint!("{self}");
    }

    /// Write the debug rendering of every part to `writer`.
    pub fn dump_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl std::fmt::Display for RecordAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, part) in self.parts.iter().enumerate() {
            writeln!(f, "[{}]", index)?;
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// Cut `pattern` at every `$`: literal text between accessors, and each
/// accessor running to the end of its key name and `[...]` groups.
fn segments(pattern: &str) -> Vec<Segment<'_>> {
    let bytes = pattern.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'$' {
            pos += 1;
            continue;
        }
        if pos > literal_start {
            segments.push(Segment::Literal(&pattern[literal_start..pos]));
        }
        let end = expression_end(bytes, pos);
        segments.push(Segment::Expression(&pattern[pos..end]));
        literal_start = end;
        pos = end;
    }

    if literal_start < bytes.len() {
        segments.push(Segment::Literal(&pattern[literal_start..]));
    }
    segments
}

/// End (exclusive) of the accessor starting with the `$` at `start`.
///
/// Always lands on an ASCII byte or the end of input, so it is a valid
/// `str` boundary.
fn expression_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start + 1;
    while end < bytes.len() && is_identifier_char(bytes[end] as char) {
        end += 1;
    }
    while end < bytes.len() && bytes[end] == b'[' {
        end = bracket_end(bytes, end);
    }
    end
}

/// End (exclusive) of the `[...]` group opening at `open`, honoring quotes.
/// An unclosed group runs to the end of input.
fn bracket_end(bytes: &[u8], open: usize) -> usize {
    let mut quote = None;
    let mut pos = open + 1;
    while pos < bytes.len() {
        let b = bytes[pos];
        match quote {
            Some(_) if b == b'\\' => pos += 1,
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'\'' | b'"' => quote = Some(b),
                b']' => return pos + 1,
                _ => {}
            },
        }
        pos += 1;
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccessorKind, ParseErrorKind};
    use facet_testhelpers::test;

    fn shapes(template: &RecordAccessor) -> Vec<(AccessorKind, &str)> {
        template
            .parts()
            .iter()
            .map(|part| (part.kind(), part.name()))
            .collect()
    }

    #[test]
    fn test_segments() {
        assert_eq!(
            segments("pod=$kubernetes['pod_name'] ns=$kubernetes[\"ns\"]!"),
            vec![
                Segment::Literal("pod="),
                Segment::Expression("$kubernetes['pod_name']"),
                Segment::Literal(" ns="),
                Segment::Expression("$kubernetes[\"ns\"]"),
                Segment::Literal("!"),
            ]
        );
    }

    #[test]
    fn test_segments_quoted_bracket() {
        assert_eq!(
            segments("$a['x]y'] tail"),
            vec![Segment::Expression("$a['x]y']"), Segment::Literal(" tail")]
        );
    }

    #[test]
    fn test_segments_adjacent_accessors() {
        assert_eq!(
            segments("$a$b"),
            vec![Segment::Expression("$a"), Segment::Expression("$b")]
        );
    }

    #[test]
    fn test_segments_unclosed_bracket_runs_to_end() {
        assert_eq!(
            segments("$a['b' rest"),
            vec![Segment::Expression("$a['b' rest")]
        );
    }

    #[test]
    fn test_segments_non_ascii_literal() {
        assert_eq!(
            segments("é$clé"),
            vec![
                Segment::Literal("é"),
                Segment::Expression("$cl"),
                Segment::Literal("é"),
            ]
        );
    }

    #[test]
    fn test_template_parts() {
        let template = RecordAccessor::new("pod=$kubernetes['pod_name'] ns=$ns").unwrap();
        assert_eq!(
            shapes(&template),
            vec![
                (AccessorKind::String, "pod="),
                (AccessorKind::Keymap, "kubernetes"),
                (AccessorKind::String, " ns="),
                (AccessorKind::Keymap, "ns"),
            ]
        );
        assert!(!template.is_static());
        assert_eq!(template.keys().count(), 2);
        assert_eq!(template.pattern(), "pod=$kubernetes['pod_name'] ns=$ns");
    }

    #[test]
    fn test_static_template() {
        let template = RecordAccessor::new("just text").unwrap();
        assert!(template.is_static());
        assert_eq!(shapes(&template), vec![(AccessorKind::String, "just text")]);
    }

    #[test]
    fn test_empty_template() {
        let template = RecordAccessor::new("").unwrap();
        assert!(template.parts().is_empty());
        assert!(template.is_static());
    }

    #[test]
    fn test_bad_part_fails_whole_template() {
        let error = RecordAccessor::new("cost: 5$").unwrap_err();
        assert_eq!(
            error.as_parse_error().map(|e| e.kind),
            Some(ParseErrorKind::ExpectedKey)
        );
        let error = RecordAccessor::new("ok $a[1] more").unwrap_err();
        assert_eq!(
            error.as_parse_error().map(|e| e.kind),
            Some(ParseErrorKind::ExpectedSubkey)
        );
    }

    #[test]
    fn test_compiled_values_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RecordAccessor>();
        assert_send_sync::<Accessor>();

        let handle = std::thread::spawn(|| RecordAccessor::new("$a['b'] c"));
        let template = handle.join().unwrap().unwrap();
        assert_eq!(template.keys().count(), 1);
    }

    #[test]
    fn test_dump() {
        let template = RecordAccessor::new("id=$log['id']").unwrap();
        insta::assert_snapshot!(template.to_string(), @r"
        [0]
        type       : STRING
        string     : 'id='
        [1]
        type       : KEYMAP
        key name   : log
         - subkey  : id
        ");
    }
}
