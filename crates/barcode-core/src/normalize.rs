//! Last-step text adjustments before the value reaches a renderer.

use barcode_model::{BarcodeFormat, parse_int_prefix};

/// Adapt checksum-applied text to the alphabet of the renderer for
/// `format`.
///
/// CODE 39 is upper-cased and every whitespace character becomes a plain
/// space. CODE 93 and codabar are upper-cased. Pharmacode is reduced to
/// its canonical integer (`" 0042"` becomes `"42"`). Other formats pass
/// through unchanged.
pub fn normalize_for_rendering(encoded: &str, format: BarcodeFormat) -> String {
    match format {
        BarcodeFormat::Code39 => encoded
            .chars()
            .map(|c| {
                if c.is_whitespace() || c == '\u{FEFF}' {
                    ' '
                } else {
                    c
                }
            })
            .collect::<String>()
            .to_uppercase(),
        BarcodeFormat::Code93 | BarcodeFormat::Codabar => encoded.to_uppercase(),
        BarcodeFormat::Pharmacode => match parse_int_prefix(encoded) {
            Some(value) => value.to_string(),
            None => encoded.to_string(),
        },
        _ => encoded.to_string(),
    }
}
