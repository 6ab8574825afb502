//! `${NAME}` environment variable translation for templates.

use std::borrow::Cow;

use tracing::debug;

/// Replace every `${NAME}` in `pattern` with `lookup(NAME)`.
///
/// Names that `lookup` does not know expand to nothing. An unterminated
/// `${` and everything after it is kept as written.
pub fn translate_env<F>(pattern: &str, lookup: F) -> Cow<'_, str>
where
    F: Fn(&str) -> Option<String>,
{
    if !pattern.contains("${") {
        return Cow::Borrowed(pattern);
    }

    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let name = &after[..end];
        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => debug!(name, "environment variable not set, expanding to nothing"),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "HOSTNAME" => Some("node-1".to_string()),
            "EMPTY" => Some(String::new()),
            _ => None,
        }
    }

    #[test]
    fn test_no_variables_borrows() {
        let out = translate_env("$kubernetes['labels']", lookup);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_known_variable() {
        assert_eq!(translate_env("host=${HOSTNAME} $log", lookup), "host=node-1 $log");
    }

    #[test]
    fn test_unknown_variable_expands_to_nothing() {
        assert_eq!(translate_env("a${MISSING}b${EMPTY}c", lookup), "abc");
    }

    #[test]
    fn test_unterminated_is_kept() {
        assert_eq!(
            translate_env("${HOSTNAME}/${HOSTNAME", lookup),
            "node-1/${HOSTNAME"
        );
    }
}
