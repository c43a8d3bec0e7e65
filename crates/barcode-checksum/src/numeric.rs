//! Digit-weighted check digit algorithms.
//!
//! Every function here first drops all characters that are not ASCII
//! digits and works on what remains. An input without digits is not an
//! error; it simply yields the check digit of an empty sequence.

/// Decimal digits of `input`, in order, with everything else removed.
pub(crate) fn digits(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Render a value in `0..=9` as its ASCII digit.
pub(crate) fn digit_char(value: u32) -> char {
    char::from(b'0' + (value % 10) as u8)
}

/// `(10 - sum mod 10) mod 10`, the complement shared by the modulo 10 family.
fn complement10(sum: u32) -> u32 {
    (10 - sum % 10) % 10
}

/// Sum of `weight(position) * digit` over `digits`, reduced modulo `modulus`
/// at every step so arbitrarily long input cannot overflow.
///
/// `weight` receives the zero-based position and must return a value
/// already reduced modulo `modulus`.
fn weighted_sum<I>(digits: I, modulus: u32, weight: impl Fn(usize) -> u32) -> u32
where
    I: IntoIterator<Item = u32>,
{
    digits
        .into_iter()
        .enumerate()
        .fold(0, |sum, (i, digit)| (sum + digit * weight(i)) % modulus)
}

/// `position + offset` reduced modulo `modulus`, without overflowing.
fn growing_weight(position: usize, offset: usize, modulus: u32) -> u32 {
    let modulus = modulus as usize;
    ((position % modulus + offset) % modulus) as u32
}

/// Doubled digit with two-digit products reduced by 9.
fn doubled(digit: u32) -> u32 {
    let value = digit * 2;
    if value > 9 { value - 9 } else { value }
}

/// Modulo 10 with doubling.
///
/// Walks right to left doubling every second digit, starting with the
/// rightmost one. This is the check digit generation form of Luhn: once the
/// result is appended, the full string passes the standard Luhn test.
pub fn mod10(input: &str) -> u8 {
    let sum = digits(input)
        .into_iter()
        .rev()
        .enumerate()
        .fold(0, |sum, (position, digit)| {
            let value = if position % 2 == 0 { doubled(digit) } else { digit };
            (sum + value) % 10
        });
    complement10(sum) as u8
}

/// Modulo 11 with cyclic weights 2 to 7 applied right to left.
///
/// Returns a value in `0..=10`; callers render 10 as `X`
/// (see [`mod11_char`]).
pub fn mod11(input: &str) -> u8 {
    const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];
    let sum = weighted_sum(digits(input).into_iter().rev(), 11, |i| {
        WEIGHTS[i % WEIGHTS.len()]
    });
    match sum {
        0 => 0,
        remainder => (11 - remainder) as u8,
    }
}

/// Character form of a modulo 11 result.
pub fn mod11_char(value: u8) -> char {
    if value == 10 {
        'X'
    } else {
        digit_char(u32::from(value))
    }
}

/// JRC (Japanese railway) check: weights 1, 2 alternating from the left.
pub fn jrc(input: &str) -> char {
    let sum = weighted_sum(digits(input), 10, |i| if i % 2 == 0 { 1 } else { 2 });
    digit_char(complement10(sum))
}

/// Luhn variant used by the Codabar tab.
///
/// Doubles the digit at index `i` when `(len - i)` is even, so the rightmost
/// digit is *not* doubled. This differs from [`mod10`] and does not produce
/// the standard Luhn check digit.
pub fn luhn(input: &str) -> char {
    let digits = digits(input);
    let len = digits.len();
    let sum = digits.iter().enumerate().fold(0, |sum, (i, &digit)| {
        let value = if (len - i) % 2 == 0 { doubled(digit) } else { digit };
        (sum + value) % 10
    });
    digit_char(complement10(sum))
}

/// Pharmazentralnummer check: weight is the 1-based position from the left.
///
/// A remainder of 10 is reported as `0`.
pub fn mod11_pzn(input: &str) -> char {
    let sum = weighted_sum(digits(input), 11, |i| growing_weight(i, 1, 11));
    match sum {
        10 => '0',
        check => digit_char(check),
    }
}

/// Modulo 11-A: weights grow from 2 right to left without cycling.
pub fn mod11_a(input: &str) -> char {
    let sum = weighted_sum(digits(input).into_iter().rev(), 11, |i| {
        growing_weight(i, 2, 11)
    });
    let check = match sum {
        0 => 0,
        remainder => 11 - remainder,
    };
    mod11_char(check as u8)
}

/// Modulo 10 with weights 1, 2; two-digit products are reduced by 9.
pub fn mod10_weight2(input: &str) -> char {
    let sum = digits(input)
        .into_iter()
        .enumerate()
        .fold(0, |sum, (i, digit)| {
            let value = if i % 2 == 0 { digit } else { doubled(digit) };
            (sum + value) % 10
        });
    digit_char(complement10(sum))
}

/// Modulo 10 with weights 1, 3.
pub fn mod10_weight3(input: &str) -> char {
    let sum = weighted_sum(digits(input), 10, |i| if i % 2 == 0 { 1 } else { 3 });
    digit_char(complement10(sum))
}

/// Repeated digit sum of `value` until a single digit remains.
pub fn digital_root(mut value: u64) -> u64 {
    while value > 9 {
        let mut next = 0;
        while value > 0 {
            next += value % 10;
            value /= 10;
        }
        value = next;
    }
    value
}

/// 7 Check DR: `(7 - dr mod 7) mod 7` over the digital root of the digit sum.
pub fn seven_check_dr(input: &str) -> char {
    let sum: u64 = digits(input).into_iter().map(u64::from).sum();
    let root = digital_root(sum);
    digit_char(((7 - root % 7) % 7) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod10_matches_standard_luhn() {
        // 79927398713 is the usual Luhn reference number.
        assert_eq!(mod10("7992739871"), 3);
        assert_eq!(mod10("123"), 0);
        assert_eq!(mod10("12"), 5);
        assert_eq!(mod10(""), 0);
    }

    #[test]
    fn test_mod10_ignores_non_digits() {
        assert_eq!(mod10("79-92 73/9871"), mod10("7992739871"));
    }

    #[test]
    fn test_luhn_variant_differs_from_mod10() {
        assert_eq!(luhn("7992739871"), '4');
        assert_ne!(luhn("7992739871"), digit_char(u32::from(mod10("7992739871"))));
    }

    #[test]
    fn test_mod11() {
        assert_eq!(mod11("123456"), 0);
        assert_eq!(mod11("1"), 9);
        assert_eq!(mod11("6"), 10);
        assert_eq!(mod11_char(mod11("6")), 'X');
        // Weights cycle back to 2 at the seventh digit.
        assert_eq!(mod11("1000000"), 9);
    }

    #[test]
    fn test_mod11_a() {
        assert_eq!(mod11_a("123456"), '0');
        assert_eq!(mod11_a("1000000"), '3');
        assert_eq!(mod11_a("6"), 'X');
    }

    #[test]
    fn test_mod11_pzn() {
        assert_eq!(mod11_pzn("123456"), '3');
        // Remainder 10 is reported as zero.
        assert_eq!(mod11_pzn("39"), '0');
    }

    #[test]
    fn test_jrc() {
        assert_eq!(jrc("1234"), '4');
        assert_eq!(jrc(""), '0');
    }

    #[test]
    fn test_weighted_mod10() {
        assert_eq!(mod10_weight2("1234"), '4');
        assert_eq!(mod10_weight2("0909"), '2');
        assert_eq!(mod10_weight3("1234"), '8');
    }

    #[test]
    fn test_seven_check_dr() {
        assert_eq!(digital_root(45), 9);
        assert_eq!(digital_root(99999), 9);
        assert_eq!(digital_root(7), 7);
        assert_eq!(seven_check_dr("1234"), '6');
        assert_eq!(seven_check_dr("99999"), '5');
        assert_eq!(seven_check_dr("7"), '0');
        assert_eq!(seven_check_dr(""), '0');
    }

    #[test]
    fn test_long_input_does_not_overflow() {
        let nines = "9".repeat(40_000);
        // 9 * (1 + .. + 40000) = 7_200_180_000, which exceeds u32.
        assert_eq!(mod11_pzn(&nines), '2');
        assert_eq!(mod11_a(&nines), '6');
        assert!(mod11(&nines) <= 10);
        for check in [
            luhn(&nines),
            jrc(&nines),
            mod10_weight2(&nines),
            mod10_weight3(&nines),
            seven_check_dr(&nines),
        ] {
            assert!(check.is_ascii_digit());
        }
        assert!(mod10(&nines) <= 9);
    }
}
