//! Side-by-side evaluation of every algorithm for one input.

use barcode_model::{ChecksumKind, is_blank};
use serde::Serialize;

use crate::check_character;

/// One algorithm's result in the calculator view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorRow {
    pub kind: ChecksumKind,
    pub name: &'static str,
    /// Check character, when the input is in the algorithm's domain.
    pub value: Option<String>,
    /// Input with the check character appended.
    pub full_value: Option<String>,
    pub applicable: bool,
}

/// Display name used in the calculator table.
pub fn calculator_name(kind: ChecksumKind) -> &'static str {
    match kind {
        ChecksumKind::None => "None",
        ChecksumKind::Mod10 => "Mod 10",
        ChecksumKind::Luhn => "Luhn (Mod 10)",
        ChecksumKind::Mod10Weight2 => "Mod 10 Weight 2",
        ChecksumKind::Mod10Weight3 => "Mod 10 Weight 3",
        ChecksumKind::Mod11 => "Mod 11",
        ChecksumKind::Mod11A => "Mod 11-A",
        ChecksumKind::Mod11Pzn => "Mod 11 PZN",
        ChecksumKind::Mod43 => "Modulo 43 (CODE 39)",
        ChecksumKind::Mod16 => "Modulo 16 (Codabar)",
        ChecksumKind::JapanNw7 => "Japan NW-7",
        ChecksumKind::Jrc => "JRC",
        ChecksumKind::SevenCheckDr => "7 Check DR",
        ChecksumKind::Mod16Japan => "Mod 16 Japan",
        ChecksumKind::Ean13 => "EAN-13",
        ChecksumKind::Upc => "UPC-A",
    }
}

/// Calculator display order.
const CALCULATOR_ORDER: [ChecksumKind; 15] = [
    ChecksumKind::Mod10,
    ChecksumKind::Luhn,
    ChecksumKind::Mod10Weight2,
    ChecksumKind::Mod10Weight3,
    ChecksumKind::Mod11,
    ChecksumKind::Mod11A,
    ChecksumKind::Mod11Pzn,
    ChecksumKind::Mod43,
    ChecksumKind::Mod16,
    ChecksumKind::JapanNw7,
    ChecksumKind::Jrc,
    ChecksumKind::SevenCheckDr,
    ChecksumKind::Mod16Japan,
    ChecksumKind::Ean13,
    ChecksumKind::Upc,
];

/// Run every algorithm on `input`, regardless of any selected format.
///
/// Blank input yields no rows. Algorithms whose input domain does not
/// include `input` are listed as not applicable without a value.
pub fn calculate_all(input: &str) -> Vec<CalculatorRow> {
    if is_blank(input) {
        return Vec::new();
    }
    CALCULATOR_ORDER
        .into_iter()
        .map(|kind| calculate_row(kind, input))
        .collect()
}

fn calculate_row(kind: ChecksumKind, input: &str) -> CalculatorRow {
    let applicable = kind.input_domain().accepts(input);
    let computed = if applicable {
        full_value(kind, input)
    } else {
        None
    };
    let (value, full_value) = match computed {
        Some((check, full)) => (Some(check.to_string()), Some(full)),
        None => (None, None),
    };
    CalculatorRow {
        kind,
        name: calculator_name(kind),
        value,
        full_value,
        applicable,
    }
}

fn full_value(kind: ChecksumKind, input: &str) -> Option<(char, String)> {
    // The calculator shows CODE 39 values the way they are encoded.
    let base = match kind {
        ChecksumKind::Mod43 => input.to_uppercase(),
        // Domain checks guarantee ASCII digits, so byte slicing is safe.
        ChecksumKind::Ean13 => input.get(..12)?.to_string(),
        ChecksumKind::Upc => input.get(..11)?.to_string(),
        _ => input.to_string(),
    };
    let check = check_character(kind, &base)?;
    let mut full = base;
    full.push(check);
    Some((check, full))
}
