//! Text to render-ready value: validate, apply the checksum, normalize.

use barcode_checksum::apply_checksum;
use barcode_model::{BarcodeFormat, ChecksumKind};
use barcode_standards::is_applicable;
use barcode_validate::Issue;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, debug_span};

use crate::normalize::normalize_for_rendering;

/// Why a value cannot be prepared for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrepareError {
    #[error("Please enter a value")]
    EmptyInput,
    #[error("{issue}")]
    FormatConstraint { format: BarcodeFormat, issue: Issue },
}

impl PrepareError {
    fn from_issue(format: BarcodeFormat, issue: Issue) -> Self {
        match issue {
            Issue::EmptyInput => PrepareError::EmptyInput,
            issue => PrepareError::FormatConstraint { format, issue },
        }
    }
}

/// A value ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedValue {
    pub input: String,
    pub format: BarcodeFormat,
    pub checksum: ChecksumKind,
    /// Input with the check character applied.
    pub encoded: String,
    /// Encoded text adapted to the renderer alphabet.
    pub value: String,
}

impl PreparedValue {
    /// True when applying the checksum changed the text.
    pub fn checksum_applied(&self) -> bool {
        self.encoded != self.input
    }
}

/// Run validation, checksum application and normalization for one value.
///
/// A checksum that does not apply to `format` is not an error: it is
/// applied anyway, and the length-gated kinds leave the text unchanged.
/// Callers decide whether to warn about the combination.
pub fn prepare(
    text: &str,
    format: BarcodeFormat,
    checksum: ChecksumKind,
) -> Result<PreparedValue, PrepareError> {
    let span = debug_span!("prepare", format = %format, checksum = %checksum);
    let _guard = span.enter();

    barcode_validate::check(text, format)
        .map_err(|issue| PrepareError::from_issue(format, issue))?;

    if !is_applicable(format, checksum) {
        debug!("checksum is not applicable to format");
    }

    let encoded = apply_checksum(text, format, checksum);
    let value = normalize_for_rendering(&encoded, format);
    debug!(input = text, encoded = %encoded, value = %value, "value prepared");

    Ok(PreparedValue {
        input: text.to_string(),
        format,
        checksum,
        encoded,
        value,
    })
}
