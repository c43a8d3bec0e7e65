use barcode_model::{BarcodeConfig, BarcodeFormat, QualityLevel, RenderStyle};
use serde::Serialize;

/// Everything a symbology renderer needs to draw one barcode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    /// Validated, checksum-applied, normalized text.
    pub value: String,
    pub format: BarcodeFormat,
    /// Style with the scale factor already applied.
    pub style: RenderStyle,
    pub quality: QualityLevel,
}

impl RenderRequest {
    pub fn new(value: String, config: &BarcodeConfig) -> Self {
        Self {
            value,
            format: config.format,
            style: config.scaled_style(),
            quality: config.quality,
        }
    }

    /// Blur radius the image post-processing step should apply.
    pub fn blur(&self) -> f32 {
        self.quality.blur()
    }
}
