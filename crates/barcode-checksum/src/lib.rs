//! Check digit algorithms for barcode values.
//!
//! The algorithm functions are pure and total: they accept any string and
//! never consult the format registry. Whether an algorithm makes sense for
//! a given format is decided by the caller.

pub mod alphabet;
pub mod apply;
pub mod calculator;
pub mod numeric;
pub mod retail;

use barcode_model::ChecksumKind;

pub use alphabet::{japan_nw7, mod16, mod16_japan, mod43};
pub use apply::apply_checksum;
pub use calculator::{CalculatorRow, calculate_all, calculator_name};
pub use numeric::{
    digital_root, jrc, luhn, mod10, mod10_weight2, mod10_weight3, mod11, mod11_a, mod11_char,
    mod11_pzn, seven_check_dr,
};
pub use retail::{ean13, upc};

/// Compute the check character `kind` produces for `input`.
///
/// Returns `None` only for [`ChecksumKind::None`].
pub fn check_character(kind: ChecksumKind, input: &str) -> Option<char> {
    let check = match kind {
        ChecksumKind::None => return None,
        ChecksumKind::Mod10 => numeric::digit_char(u32::from(mod10(input))),
        ChecksumKind::Mod11 => mod11_char(mod11(input)),
        ChecksumKind::Mod43 => mod43(input),
        ChecksumKind::Mod16 => mod16(input),
        ChecksumKind::JapanNw7 => japan_nw7(input),
        ChecksumKind::Jrc => jrc(input),
        ChecksumKind::Luhn => luhn(input),
        ChecksumKind::Mod11Pzn => mod11_pzn(input),
        ChecksumKind::Mod11A => mod11_a(input),
        ChecksumKind::Mod10Weight2 => mod10_weight2(input),
        ChecksumKind::Mod10Weight3 => mod10_weight3(input),
        ChecksumKind::SevenCheckDr => seven_check_dr(input),
        ChecksumKind::Mod16Japan => mod16_japan(input),
        ChecksumKind::Ean13 => numeric::digit_char(u32::from(ean13(input))),
        ChecksumKind::Upc => numeric::digit_char(u32::from(upc(input))),
    };
    Some(check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_but_none_produces_a_character() {
        for kind in ChecksumKind::ALL {
            assert_eq!(check_character(kind, "12345").is_some(), !kind.is_none());
        }
    }
}
