//! Validation issue types.
//!
//! Each variant carries only the data its message needs.

use barcode_model::BarcodeFormat;
use serde::Serialize;

/// Why a value cannot be encoded in the selected format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Issue {
    /// Text is empty or whitespace only.
    EmptyInput,
    /// Character outside the CODE 39 alphabet.
    Code39Charset,
    /// Value is not a digit string of an accepted length.
    DigitLength { format: BarcodeFormat },
    /// ITF value is not an even-length digit string.
    OddDigitCount,
    /// Pharmacode value does not parse into [3, 131070].
    PharmacodeRange,
    /// MSI family value contains a non-digit.
    MsiDigits { format: BarcodeFormat },
}

impl Issue {
    /// User-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            Issue::EmptyInput => "Please enter a value",
            Issue::Code39Charset => "CODE 39 only supports A-Z, 0-9, -, ., $, /, +, %, and space",
            Issue::DigitLength { format } => digit_length_message(*format),
            Issue::OddDigitCount => "ITF requires an even number of digits",
            Issue::PharmacodeRange => "Pharmacode requires a number between 3 and 131070",
            Issue::MsiDigits { .. } => "MSI formats only support digits",
        }
    }
}

fn digit_length_message(format: BarcodeFormat) -> &'static str {
    match format {
        BarcodeFormat::Ean13 => "EAN-13 requires exactly 12 or 13 digits",
        BarcodeFormat::Ean8 => "EAN-8 requires exactly 7 or 8 digits",
        BarcodeFormat::Ean5 => "EAN-5 requires exactly 5 digits",
        BarcodeFormat::Ean2 => "EAN-2 requires exactly 2 digits",
        BarcodeFormat::Upc => "UPC-A requires exactly 11 or 12 digits",
        BarcodeFormat::UpcE => "UPC-E requires 6, 7, or 8 digits",
        BarcodeFormat::Itf14 => "ITF-14 requires exactly 13 or 14 digits",
        _ => "Invalid number of digits",
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Issue {}
