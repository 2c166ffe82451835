//! Validation of caller-supplied path segments
//!
//! Names and slots are checked before anything is sent to the device.

use crate::error::{GatewayError, Result};

/// Whitespace as matched by `\s` in ECMAScript regular expressions.
///
/// Differs from [`char::is_whitespace`]: U+FEFF is included, U+0085 is not.
pub fn is_pattern_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Whether `value` is an acceptable sequence, playlist, effect, or command name.
///
/// Accepts ASCII letters and digits, `.`, `_`, `-`, and whitespace (see
/// [`is_pattern_whitespace`]). Empty strings are rejected.
pub fn is_valid_name(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') || is_pattern_whitespace(c)
        })
}

/// Whether `value` is a command preset slot: one or more ASCII digits.
pub fn is_valid_slot(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a name, describing it as `what` in the error message.
pub fn validate_name<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    if is_valid_name(value) {
        Ok(value)
    } else {
        Err(GatewayError::InvalidInput(format!("Invalid {} name", what)))
    }
}

pub fn validate_slot(value: &str) -> Result<&str> {
    if is_valid_slot(value) {
        Ok(value)
    } else {
        Err(GatewayError::InvalidInput("Invalid slot number".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["fire", "Plasma Parts", "shock-4", "show_v2.1", "a\tb", "007"] {
            assert!(is_valid_name(name), "{:?} should be accepted", name);
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "../etc", "a/b", "fire?x=1", "50%", "caf\u{e9}", "a&b", "<script>"] {
            assert!(!is_valid_name(name), "{:?} should be rejected", name);
        }
    }

    #[test]
    fn test_whitespace_set() {
        assert!(is_valid_name("a\u{feff}b"));
        assert!(is_valid_name("a\u{3000}b"));
        assert!(is_valid_name("a\u{2005}b"));
        assert!(!is_valid_name("a\u{85}b"));
        assert!(!is_valid_name("a\u{200b}b")); // zero-width space
    }

    #[test]
    fn test_slots() {
        assert!(is_valid_slot("1"));
        assert!(is_valid_slot("042"));
        assert!(!is_valid_slot(""));
        assert!(!is_valid_slot("1a"));
        assert!(!is_valid_slot("-1"));
        assert!(!is_valid_slot(" 1"));
        assert!(!is_valid_slot("\u{661}")); // Arabic-Indic digit one
    }

    #[test]
    fn test_validate_messages() {
        let err = validate_name("sequence", "a/b").unwrap_err();
        assert_eq!(err.to_string(), "Invalid sequence name");

        let err = validate_slot("x").unwrap_err();
        assert_eq!(err.to_string(), "Invalid slot number");

        assert_eq!(validate_name("playlist", "Evening").unwrap(), "Evening");
        assert_eq!(validate_slot("4").unwrap(), "4");
    }
}
