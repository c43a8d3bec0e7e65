//! Editable state of the single-barcode workflow.

use barcode_checksum::{CalculatorRow, apply_checksum, calculate_all};
use barcode_model::{
    BarcodeConfig, BarcodeFormat, ChecksumKind, QualityLevel, RenderStyle, ValidationResult,
};
use barcode_standards::{ChecksumOption, descriptor};
use barcode_validate::validate;

use crate::pipeline::{PrepareError, prepare};
use crate::render::RenderRequest;

/// One barcode being edited.
///
/// Only the configuration is stored. Validation, the encoded value and the
/// render request are recomputed from it on every call, so they can never
/// go stale after an edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    config: BarcodeConfig,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: BarcodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BarcodeConfig {
        &self.config
    }

    /// Change the format. The checksum selection is reset to `none`.
    pub fn set_format(&mut self, format: BarcodeFormat) {
        self.config.set_format(format);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.config.set_text(text);
    }

    pub fn set_checksum(&mut self, checksum: ChecksumKind) {
        self.config.set_checksum(checksum);
    }

    /// Unscaled style, for individual style edits.
    pub fn style_mut(&mut self) -> &mut RenderStyle {
        &mut self.config.style
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.config.scale = scale;
    }

    pub fn set_quality(&mut self, quality: QualityLevel) {
        self.config.quality = quality;
    }

    /// Checksums the current format offers, `none` first.
    pub fn checksum_options(&self) -> &'static [ChecksumOption] {
        &descriptor(self.config.format).checksums
    }

    pub fn validation(&self) -> ValidationResult {
        validate(&self.config.text, self.config.format)
    }

    /// Text with the selected checksum applied, before normalization.
    pub fn encoded_value(&self) -> String {
        apply_checksum(&self.config.text, self.config.format, self.config.checksum)
    }

    /// Calculator rows for the current text.
    pub fn calculator(&self) -> Vec<CalculatorRow> {
        calculate_all(&self.config.text)
    }

    pub fn render_request(&self) -> Result<RenderRequest, PrepareError> {
        let prepared = prepare(&self.config.text, self.config.format, self.config.checksum)?;
        Ok(RenderRequest::new(prepared.value, &self.config))
    }
}
