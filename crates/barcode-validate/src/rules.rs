//! Per-format input rules.
//!
//! Digit classes are ASCII only: a Unicode digit such as `٣` is never
//! accepted where the symbology expects `0-9`.

use std::sync::LazyLock;

use barcode_model::{BarcodeFormat, is_blank, parse_int_prefix};
use regex::Regex;

use crate::issue::Issue;

/// CODE 39 alphabet, either case. `\s` plus U+FEFF covers every character
/// the renderer turns into a space.
static CODE39_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\-.\s\x{FEFF}$/+%]+$").expect("Invalid CODE 39 regex")
});

static DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid digits regex"));

const PHARMACODE_MIN: i64 = 3;
const PHARMACODE_MAX: i64 = 131_070;

/// Inclusive digit count range for fixed-length numeric formats.
fn digit_range(format: BarcodeFormat) -> Option<(usize, usize)> {
    match format {
        BarcodeFormat::Ean13 => Some((12, 13)),
        BarcodeFormat::Ean8 => Some((7, 8)),
        BarcodeFormat::Ean5 => Some((5, 5)),
        BarcodeFormat::Ean2 => Some((2, 2)),
        BarcodeFormat::Upc => Some((11, 12)),
        BarcodeFormat::UpcE => Some((6, 8)),
        BarcodeFormat::Itf14 => Some((13, 14)),
        _ => None,
    }
}

fn is_digits(text: &str) -> bool {
    DIGITS_REGEX.is_match(text)
}

/// Check `text` against the rules of `format`.
///
/// The blank check runs first for every format. Formats without a rule
/// (CODE 93, CODE 128, codabar and the matrix formats) accept any
/// non-blank text.
pub fn check(text: &str, format: BarcodeFormat) -> Result<(), Issue> {
    if is_blank(text) {
        return Err(Issue::EmptyInput);
    }

    if let Some((min, max)) = digit_range(format) {
        // Digits are single bytes, so byte length is the digit count.
        return if is_digits(text) && (min..=max).contains(&text.len()) {
            Ok(())
        } else {
            Err(Issue::DigitLength { format })
        };
    }

    match format {
        BarcodeFormat::Code39 if !CODE39_REGEX.is_match(text) => Err(Issue::Code39Charset),
        BarcodeFormat::Itf if !is_digits(text) || text.len() % 2 != 0 => Err(Issue::OddDigitCount),
        BarcodeFormat::Pharmacode => match parse_int_prefix(text) {
            Some(value) if (PHARMACODE_MIN..=PHARMACODE_MAX).contains(&value) => Ok(()),
            _ => Err(Issue::PharmacodeRange),
        },
        BarcodeFormat::Msi
        | BarcodeFormat::Msi10
        | BarcodeFormat::Msi11
        | BarcodeFormat::Msi1010
        | BarcodeFormat::Msi1110
            if !is_digits(text) =>
        {
            Err(Issue::MsiDigits { format })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_precedes_format_rules() {
        for format in BarcodeFormat::ALL {
            assert_eq!(check("", format), Err(Issue::EmptyInput));
            assert_eq!(check(" \t\n", format), Err(Issue::EmptyInput));
        }
    }

    #[test]
    fn test_digit_ranges() {
        assert!(check("1234567", BarcodeFormat::Ean8).is_ok());
        assert!(check("123456", BarcodeFormat::Ean8).is_err());
        assert!(check("123456", BarcodeFormat::UpcE).is_ok());
        assert!(check("123456789", BarcodeFormat::UpcE).is_err());
        assert!(check("1234567890123", BarcodeFormat::Itf14).is_ok());
        assert!(check("12", BarcodeFormat::Ean2).is_ok());
        assert!(check("1a", BarcodeFormat::Ean2).is_err());
    }

    #[test]
    fn test_unicode_digits_are_rejected() {
        assert!(check("١٢", BarcodeFormat::Ean2).is_err());
        assert!(check("١٢", BarcodeFormat::Itf).is_err());
        assert!(check("٣", BarcodeFormat::Msi).is_err());
    }

    #[test]
    fn test_code39_ignores_case_but_not_folding() {
        assert!(check("abc-123 $/+%.", BarcodeFormat::Code39).is_ok());
        assert_eq!(
            check("ABC_123", BarcodeFormat::Code39),
            Err(Issue::Code39Charset)
        );
        // U+017F folds to `s` under Unicode case folding.
        assert!(check("\u{17F}", BarcodeFormat::Code39).is_err());
    }

    #[test]
    fn test_pharmacode_prefix_parse() {
        assert!(check("3", BarcodeFormat::Pharmacode).is_ok());
        assert!(check("131070", BarcodeFormat::Pharmacode).is_ok());
        assert!(check("  42abc", BarcodeFormat::Pharmacode).is_ok());
        assert!(check("2", BarcodeFormat::Pharmacode).is_err());
        assert!(check("131071", BarcodeFormat::Pharmacode).is_err());
        assert!(check("-5", BarcodeFormat::Pharmacode).is_err());
        assert!(check("abc", BarcodeFormat::Pharmacode).is_err());
    }
}
