//! Escaping of user supplied text.
//!
//! DOT quoted strings only need two characters treated specially: the double
//! quote, which would terminate the string, and the raw newline, which DOT
//! expects as the two-character `\n` escape. Everything else is passed through.
//!
//! Sanitizing is not idempotent: running already sanitized text through
//! [`sanitize`] escapes it a second time. Attribute setters sanitize once, when
//! the value is stored; rendering never sanitizes.

use std::borrow::Cow;

/// Keywords that can never appear as bare identifiers.
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Escapes double quotes and converts newlines to the `\n` escape sequence.
///
/// # Examples
///
/// ```
/// use dotwright_core::sanitize::sanitize;
///
/// assert_eq!(sanitize("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(sanitize("two\nlines"), "two\\nlines");
/// ```
pub fn sanitize(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Returns `true` if `id` can be written without quotes.
///
/// A bare DOT identifier is either a string of letters, digits and underscores
/// not starting with a digit, or a numeral. Keywords are never bare.
pub fn is_bare_id(id: &str) -> bool {
    if id.is_empty() || KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(id)) {
        return false;
    }
    is_plain_name(id) || is_numeral(id)
}

/// Renders an identifier, quoting and sanitizing it when it is not bare.
///
/// DOT reads `\\` inside a quoted string as a pair, so a run of backslashes
/// that ends the identifier or precedes a quote is padded to an even length.
/// Otherwise the last backslash would escape the quote that follows it.
///
/// # Examples
///
/// ```
/// use dotwright_core::sanitize::quote_id;
///
/// assert_eq!(quote_id("Node0"), "Node0");
/// assert_eq!(quote_id("my node"), "\"my node\"");
/// assert_eq!(quote_id("graph"), "\"graph\"");
/// assert_eq!(quote_id(r"dir\"), r#""dir\\""#);
/// ```
pub fn quote_id(id: &str) -> Cow<'_, str> {
    if is_bare_id(id) {
        Cow::Borrowed(id)
    } else {
        Cow::Owned(format!("\"{}\"", sanitize(&pair_backslashes(id))))
    }
}

fn pair_backslashes(id: &str) -> String {
    let mut paired = String::with_capacity(id.len() + 1);
    let mut run = 0usize;
    for c in id.chars() {
        if c == '\\' {
            run += 1;
        } else {
            if c == '"' && run % 2 == 1 {
                paired.push('\\');
            }
            run = 0;
        }
        paired.push(c);
    }
    if run % 2 == 1 {
        paired.push('\\');
    }
    paired
}

fn is_plain_name(id: &str) -> bool {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let is_name_char = |c: char| c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii();
    (first.is_ascii_alphabetic() || first == '_' || !first.is_ascii()) && chars.all(is_name_char)
}

// [-]?(.[0-9]+ | [0-9]+(.[0-9]*)?)
fn is_numeral(id: &str) -> bool {
    let digits = id.strip_prefix('-').unwrap_or(id);
    let (integral, fractional) = match digits.split_once('.') {
        Some((integral, fractional)) => (integral, Some(fractional)),
        None => (digits, None),
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    match fractional {
        None => !integral.is_empty() && all_digits(integral),
        Some(fractional) => {
            all_digits(integral)
                && all_digits(fractional)
                && (!integral.is_empty() || !fractional.is_empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_text_untouched() {
        assert_eq!(sanitize("hello world"), "hello world");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_sanitize_escapes_quotes() {
        assert_eq!(sanitize(r#"a "b" c"#), r#"a \"b\" c"#);
    }

    #[test]
    fn test_sanitize_escapes_newlines() {
        assert_eq!(sanitize("a\nb\n"), "a\\nb\\n");
    }

    #[test]
    fn test_sanitize_is_not_idempotent() {
        let once = sanitize("\"");
        let twice = sanitize(&once);

        assert_eq!(once, "\\\"");
        assert_eq!(twice, "\\\\\"");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_sanitize_keeps_backslashes() {
        assert_eq!(sanitize(r"C:\temp"), r"C:\temp");
    }

    #[test]
    fn test_is_bare_id() {
        assert!(is_bare_id("Node0"));
        assert!(is_bare_id("_private"));
        assert!(is_bare_id("cluster_1"));
        assert!(is_bare_id("42"));
        assert!(is_bare_id("-1.5"));
        assert!(is_bare_id(".5"));
        assert!(is_bare_id("héllo"));

        assert!(!is_bare_id(""));
        assert!(!is_bare_id("0abc"));
        assert!(!is_bare_id("a b"));
        assert!(!is_bare_id("a-b"));
        assert!(!is_bare_id("."));
        assert!(!is_bare_id("1.2.3"));
        assert!(!is_bare_id("Subgraph"));
    }

    #[test]
    fn test_quote_id() {
        assert_eq!(quote_id("foo"), "foo");
        assert_eq!(quote_id("foo bar"), "\"foo bar\"");
        assert_eq!(quote_id("say \"x\""), "\"say \\\"x\\\"\"");
        assert_eq!(quote_id(""), "\"\"");
    }

    #[test]
    fn test_quote_id_pairs_trailing_backslashes() {
        assert_eq!(quote_id("a\\"), r#""a\\""#);
        assert_eq!(quote_id("a\\\\"), r#""a\\""#);
        assert_eq!(quote_id("a\\\\\\"), r#""a\\\\""#);
        assert_eq!(quote_id(r"C:\temp dir"), r#""C:\temp dir""#);
    }

    #[test]
    fn test_quote_id_pairs_backslashes_before_quotes() {
        assert_eq!(quote_id(r#"a\"b"#), r#""a\\\"b""#);
        assert_eq!(quote_id(r#"a\\"b"#), r#""a\\\"b""#);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Property Test Functions
    // ===================

    /// Sanitized text never contains a raw newline or an unescaped quote.
    fn check_sanitized_text_is_safe(text: &str) -> Result<(), TestCaseError> {
        let escaped = sanitize(text);

        prop_assert!(!escaped.contains('\n'));
        let mut previous = None;
        for c in escaped.chars() {
            if c == '"' {
                prop_assert_eq!(previous, Some('\\'), "unescaped quote in {}", escaped);
            }
            previous = Some(c);
        }
        Ok(())
    }

    /// Quoted identifiers are always wrapped in quotes; bare ones pass through.
    fn check_quote_id_shape(id: &str) -> Result<(), TestCaseError> {
        let quoted = quote_id(id);
        if is_bare_id(id) {
            prop_assert_eq!(quoted.as_ref(), id);
        } else {
            prop_assert!(quoted.starts_with('"') && quoted.ends_with('"'));
        }
        Ok(())
    }

    /// The body of a quoted identifier, read the way DOT reads it (`\\` and
    /// `\"` are pairs), never ends inside an escape or before its last quote.
    fn check_quoted_id_terminates(id: &str) -> Result<(), TestCaseError> {
        let quoted = quote_id(id);
        if is_bare_id(id) {
            return Ok(());
        }

        let mut chars = quoted.chars().skip(1);
        let mut closed_at = None;
        let mut position = 1;
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if chars.next().is_some() {
                        position += 1;
                    }
                }
                '"' => {
                    closed_at = Some(position);
                    break;
                }
                _ => {}
            }
            position += 1;
        }
        prop_assert_eq!(closed_at, Some(quoted.chars().count() - 1), "bad quoting: {}", quoted);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn sanitized_text_is_safe(text in "[a-z\"\n ]{0,32}") {
            check_sanitized_text_is_safe(&text)?;
        }

        #[test]
        fn quote_id_shape(id in "[a-zA-Z0-9_ .\"-]{0,12}") {
            check_quote_id_shape(&id)?;
        }

        #[test]
        fn quoted_id_terminates(id in "[a-z\\\\\" ]{0,12}") {
            check_quoted_id_terminates(&id)?;
        }
    }
}
