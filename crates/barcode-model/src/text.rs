//! Text helpers shared by validation, checksum application and rendering.

/// Returns true if `text` is empty or contains only whitespace.
///
/// The byte order mark counts as whitespace, matching what browser
/// front-ends strip when trimming input fields.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_trim_whitespace)
}

fn is_trim_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Parse the leading decimal integer of `text`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, then as many
/// ASCII digits as follow; anything after the digits is ignored. Returns
/// `None` when no digit is found. Values beyond the `i64` range saturate.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let rest = text.trim_start_matches(is_trim_whitespace);
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in rest.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t\n"));
        assert!(is_blank("\u{FEFF} "));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  007"), Some(7));
        assert_eq!(parse_int_prefix("+15"), Some(15));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
    }
}
