//! Session configuration for a single barcode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::checksum::ChecksumKind;
use crate::error::BarcodeError;
use crate::format::BarcodeFormat;

/// Output quality preset.
///
/// Only the metadata lives here; applying the blur is left to the image
/// post-processing collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityLevel {
    /// Crystal clear, sharp edges.
    #[default]
    A,
    /// Slightly softened edges.
    B,
    /// Blurred, degraded appearance.
    C,
}

impl QualityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            QualityLevel::A => "High (A)",
            QualityLevel::B => "Medium (B)",
            QualityLevel::C => "Low (C)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QualityLevel::A => "Crystal clear, sharp edges",
            QualityLevel::B => "Slightly softened edges",
            QualityLevel::C => "Blurred, degraded appearance",
        }
    }

    /// Gaussian blur radius in pixels.
    pub fn blur(&self) -> f32 {
        match self {
            QualityLevel::A => 0.0,
            QualityLevel::B => 0.5,
            QualityLevel::C => 1.2,
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for QualityLevel {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" | "HIGH" => Ok(QualityLevel::A),
            "B" | "MEDIUM" => Ok(QualityLevel::B),
            "C" | "LOW" => Ok(QualityLevel::C),
            _ => Err(BarcodeError::UnknownQuality {
                name: s.to_string(),
            }),
        }
    }
}

/// Named output scale presets.
pub const SCALE_PRESETS: [(&str, f32); 3] = [("Small", 0.5), ("Medium", 1.0), ("Large", 2.0)];

/// Visual styling handed to the symbology renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStyle {
    /// Width of a single bar module in pixels.
    pub width: f32,
    /// Bar height in pixels.
    pub height: f32,
    pub margin: f32,
    pub font_size: f32,
    pub display_value: bool,
    pub line_color: String,
    pub background: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 100.0,
            margin: 10.0,
            font_size: 16.0,
            display_value: true,
            line_color: "#000000".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}

impl RenderStyle {
    /// Multiply every pixel dimension by `scale`.
    #[must_use]
    pub fn scaled(&self, scale: f32) -> Self {
        Self {
            width: self.width * scale,
            height: self.height * scale,
            margin: self.margin * scale,
            font_size: self.font_size * scale,
            ..self.clone()
        }
    }
}

/// Returns true for `#RRGGBB` color strings.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Editable state of one barcode.
///
/// The encoded value is not stored. It is derived from
/// `text`, `format` and `checksum`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeConfig {
    pub format: BarcodeFormat,
    pub text: String,
    #[serde(rename = "checksumType")]
    pub checksum: ChecksumKind,
    #[serde(flatten)]
    pub style: RenderStyle,
    pub scale: f32,
    pub quality: QualityLevel,
}

impl Default for BarcodeConfig {
    fn default() -> Self {
        Self {
            format: BarcodeFormat::Code39,
            text: "BARCODE123".to_string(),
            checksum: ChecksumKind::None,
            style: RenderStyle::default(),
            scale: 1.0,
            quality: QualityLevel::A,
        }
    }
}

impl BarcodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch format. Checksum applicability is format specific, so the
    /// selection is reset to `none`.
    pub fn set_format(&mut self, format: BarcodeFormat) {
        self.format = format;
        self.checksum = ChecksumKind::None;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_checksum(&mut self, checksum: ChecksumKind) {
        self.checksum = checksum;
    }

    #[must_use]
    pub fn with_format(mut self, format: BarcodeFormat) -> Self {
        self.set_format(format);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn with_checksum(mut self, checksum: ChecksumKind) -> Self {
        self.set_checksum(checksum);
        self
    }

    /// Style with the scale factor applied.
    pub fn scaled_style(&self) -> RenderStyle {
        self.style.scaled(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BarcodeConfig::default();
        assert_eq!(config.format, BarcodeFormat::Code39);
        assert_eq!(config.text, "BARCODE123");
        assert_eq!(config.checksum, ChecksumKind::None);
        assert_eq!(config.quality, QualityLevel::A);
        assert!(config.style.display_value);
    }

    #[test]
    fn test_set_format_resets_checksum() {
        let mut config = BarcodeConfig::default().with_checksum(ChecksumKind::Mod43);
        config.set_format(BarcodeFormat::Ean13);
        assert_eq!(config.checksum, ChecksumKind::None);
    }

    #[test]
    fn test_scaled_style() {
        let style = RenderStyle::default().scaled(2.0);
        assert_eq!(style.width, 4.0);
        assert_eq!(style.height, 200.0);
        assert_eq!(style.margin, 20.0);
        assert_eq!(style.font_size, 32.0);
        assert_eq!(style.line_color, "#000000");
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#00ffAA"));
        assert!(!is_hex_color("00ffAA"));
        assert!(!is_hex_color("#00ffAG"));
        assert!(!is_hex_color("#fff"));
    }

    #[test]
    fn test_quality_levels() {
        assert_eq!("b".parse::<QualityLevel>().unwrap(), QualityLevel::B);
        assert_eq!(QualityLevel::C.blur(), 1.2);
        assert_eq!(QualityLevel::B.description(), "Slightly softened edges");
        assert!("z".parse::<QualityLevel>().is_err());
    }
}
