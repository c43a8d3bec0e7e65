//! Appending check characters to user text.

use barcode_model::{BarcodeFormat, ChecksumKind, is_blank};
use tracing::debug;

use crate::check_character;

/// Append the check character selected by `kind` to `text`.
///
/// The text is returned unchanged when `kind` is `none`, the text is blank,
/// or a length-gated kind does not get the length it needs (EAN-13 wants
/// exactly 12 characters, UPC-A exactly 11). Applicability to `format` is not
/// checked here; any kind can be applied to any format.
pub fn apply_checksum(text: &str, format: BarcodeFormat, kind: ChecksumKind) -> String {
    if kind.is_none() || is_blank(text) {
        return text.to_string();
    }

    let length = text.chars().count();
    let required = match kind {
        ChecksumKind::Ean13 => Some(12),
        ChecksumKind::Upc => Some(11),
        _ => None,
    };
    if let Some(required) = required
        && length != required
    {
        debug!(
            checksum = %kind,
            length,
            required,
            "input length does not match, checksum skipped"
        );
        return text.to_string();
    }

    let Some(check) = check_character(kind, text) else {
        return text.to_string();
    };
    let mut encoded = String::with_capacity(text.len() + 2);
    encoded.push_str(text);
    encoded.push(check);

    if kind == ChecksumKind::Mod10 {
        encoded = pad_interleaved(encoded, format);
    }
    encoded
}

/// Interleaved formats pair digits, so an odd-length result gets a leading
/// zero.
fn pad_interleaved(encoded: String, format: BarcodeFormat) -> String {
    match format {
        BarcodeFormat::Itf | BarcodeFormat::Itf14 if encoded.chars().count() % 2 != 0 => {
            debug!(format = %format, "padding interleaved value to even length");
            format!("0{encoded}")
        }
        _ => encoded,
    }
}
