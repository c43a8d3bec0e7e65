//! GS1 retail check digits (EAN-13 and UPC-A).
//!
//! Both read a fixed number of leading digits. Positions beyond the
//! available digits count as zero, which keeps the functions total; the
//! applicator only calls them with exactly the expected length.

use crate::numeric::digits;

fn padded_digits(input: &str, count: usize) -> Vec<u32> {
    let mut values = digits(input);
    values.resize(count, 0);
    values
}

/// EAN-13 check digit over the first 12 digits (weights 1, 3).
pub fn ean13(input: &str) -> u8 {
    let sum: u32 = padded_digits(input, 12)
        .into_iter()
        .enumerate()
        .map(|(i, digit)| digit * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// UPC-A check digit over the first 11 digits.
///
/// Digits in odd positions (1st, 3rd, ...) are tripled.
pub fn upc(input: &str) -> u8 {
    let (odd, even) = padded_digits(input, 11).into_iter().enumerate().fold(
        (0u32, 0u32),
        |(odd, even), (i, digit)| {
            if i % 2 == 0 {
                (odd + digit, even)
            } else {
                (odd, even + digit)
            }
        },
    );
    let total = odd * 3 + even;
    ((10 - total % 10) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ean13() {
        assert_eq!(ean13("590123412345"), 7);
        assert_eq!(ean13("400638133393"), 1);
        // Only the first twelve digits count.
        assert_eq!(ean13("5901234123457"), 7);
    }

    #[test]
    fn test_upc() {
        assert_eq!(upc("03600029145"), 2);
        assert_eq!(upc("036000291452"), 2);
    }

    #[test]
    fn test_short_input_is_zero_padded() {
        assert_eq!(ean13("5"), ean13("500000000000"));
        assert_eq!(upc(""), 0);
    }
}
