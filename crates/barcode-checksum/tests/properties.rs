//! Property tests for the check digit algorithms.

use barcode_checksum::{apply_checksum, check_character, mod10, mod11, mod43};
use barcode_model::{BarcodeFormat, ChecksumKind};
use proptest::prelude::*;

/// Standard Luhn test over a full digit string (check digit included).
fn luhn_valid(value: &str) -> bool {
    let sum: u32 = value
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, digit)| {
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    sum % 10 == 0
}

#[test]
fn long_digit_strings_fan_out_without_overflow() {
    let nines = "9".repeat(40_000);
    let rows = barcode_checksum::calculate_all(&nines);
    assert_eq!(rows.len(), 15);
    assert!(rows.iter().all(|row| row.applicable && row.value.is_some()));

    let encoded = apply_checksum(&nines, BarcodeFormat::Codabar, ChecksumKind::Mod11Pzn);
    assert_eq!(encoded.len(), nines.len() + 1);
    assert!(encoded.ends_with('2'));
}

proptest! {
    #[test]
    fn mod10_check_digit_makes_value_luhn_valid(digits in "[0-9]{1,40}") {
        let check = mod10(&digits);
        prop_assert!(check <= 9);
        let full = format!("{digits}{check}");
        prop_assert!(luhn_valid(&full));
    }

    #[test]
    fn mod11_stays_in_range(digits in "[0-9]{0,40}") {
        prop_assert!(mod11(&digits) <= 10);
    }

    #[test]
    fn mod43_result_is_in_code39_alphabet(text in "[ -~]{0,30}") {
        let check = mod43(&text);
        prop_assert!(barcode_checksum::alphabet::CODE39_ALPHABET.contains(check));
    }

    #[test]
    fn algorithms_are_deterministic(text in "\\PC{0,24}") {
        for kind in ChecksumKind::ALL {
            prop_assert_eq!(check_character(kind, &text), check_character(kind, &text));
        }
    }

    #[test]
    fn interleaved_mod10_result_has_even_length(digits in "[0-9]{1,30}") {
        for format in [BarcodeFormat::Itf, BarcodeFormat::Itf14] {
            let encoded = apply_checksum(&digits, format, ChecksumKind::Mod10);
            prop_assert_eq!(encoded.len() % 2, 0);
            prop_assert!(encoded.contains(digits.as_str()));
        }
    }

    #[test]
    fn applied_checksum_extends_input(digits in "[0-9]{1,30}") {
        for kind in ChecksumKind::ALL {
            if matches!(kind, ChecksumKind::None | ChecksumKind::Ean13 | ChecksumKind::Upc) {
                continue;
            }
            let encoded = apply_checksum(&digits, BarcodeFormat::Msi, kind);
            prop_assert!(encoded.starts_with(&digits));
            prop_assert_eq!(encoded.chars().count(), digits.chars().count() + 1);
        }
    }
}
