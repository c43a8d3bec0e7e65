//! Style profile loading.
//!
//! A profile is a TOML file that overrides the session defaults:
//!
//! ```toml
//! format = "CODE128"
//! checksum = "mod10"
//! quality = "B"
//! scale = 1.5
//!
//! [style]
//! width = 3
//! line_color = "#1A1A1A"
//! ```
//!
//! Without `--config` the profile is read from the platform config folder
//! (`~/.config/barcode-studio/config.toml` on Linux). The file is only ever
//! read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use barcode_model::{
    BarcodeConfig, BarcodeError, BarcodeFormat, ChecksumKind, QualityLevel, is_hex_color,
};
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "barcode-studio";
const APP_NAME: &str = "barcode-studio";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid {field}: {source}")]
    Unknown {
        field: &'static str,
        #[source]
        source: BarcodeError,
    },
    #[error("{field} must be a #RRGGBB color, got {value:?}")]
    InvalidColor { field: &'static str, value: String },
    #[error("{field} must be a positive number, got {value}")]
    InvalidNumber { field: &'static str, value: f32 },
}

/// Overrides for the session defaults. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleProfile {
    pub format: Option<String>,
    pub checksum: Option<String>,
    pub quality: Option<String>,
    pub scale: Option<f32>,
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub margin: Option<f32>,
    pub font_size: Option<f32>,
    pub display_value: Option<bool>,
    pub line_color: Option<String>,
    pub background: Option<String>,
}

impl StyleProfile {
    /// Parse and check a profile from TOML text.
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let profile: StyleProfile = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        profile.to_config()?;
        Ok(profile)
    }

    /// Session defaults with this profile applied.
    pub fn to_config(&self) -> Result<BarcodeConfig, ConfigError> {
        let mut config = BarcodeConfig::default();
        self.apply(&mut config)?;
        Ok(config)
    }

    /// Apply the profile on top of `config`.
    ///
    /// The format is applied before the checksum, since changing the
    /// format resets the checksum selection.
    pub fn apply(&self, config: &mut BarcodeConfig) -> Result<(), ConfigError> {
        if let Some(format) = &self.format {
            config.set_format(parse_field::<BarcodeFormat>("format", format)?);
        }
        if let Some(checksum) = &self.checksum {
            config.set_checksum(parse_field::<ChecksumKind>("checksum", checksum)?);
        }
        if let Some(quality) = &self.quality {
            config.quality = parse_field::<QualityLevel>("quality", quality)?;
        }
        if let Some(scale) = self.scale {
            config.scale = positive("scale", scale)?;
        }

        let style = &self.style;
        let target = &mut config.style;
        if let Some(width) = style.width {
            target.width = positive("style.width", width)?;
        }
        if let Some(height) = style.height {
            target.height = positive("style.height", height)?;
        }
        if let Some(margin) = style.margin {
            target.margin = non_negative("style.margin", margin)?;
        }
        if let Some(font_size) = style.font_size {
            target.font_size = positive("style.font_size", font_size)?;
        }
        if let Some(display_value) = style.display_value {
            target.display_value = display_value;
        }
        if let Some(color) = &style.line_color {
            target.line_color = hex_color("style.line_color", color)?;
        }
        if let Some(color) = &style.background {
            target.background = hex_color("style.background", color)?;
        }
        Ok(())
    }
}

fn parse_field<T>(field: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = BarcodeError>,
{
    value
        .parse()
        .map_err(|source| ConfigError::Unknown { field, source })
}

fn positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidNumber { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidNumber { field, value })
    }
}

fn hex_color(field: &'static str, value: &str) -> Result<String, ConfigError> {
    if is_hex_color(value) {
        Ok(value.to_uppercase())
    } else {
        Err(ConfigError::InvalidColor {
            field,
            value: value.to_string(),
        })
    }
}

/// Path of the default profile, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load the style profile.
///
/// An explicit `path` must exist and be valid. The default profile is
/// optional: when it is missing, unreadable or invalid the defaults are
/// used and a warning is logged.
pub fn load_profile(path: Option<&Path>) -> Result<StyleProfile, ConfigError> {
    if let Some(path) = path {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = StyleProfile::from_toml(path, &content)?;
        info!(path = %path.display(), "loaded style profile");
        return Ok(profile);
    }

    let Some(path) = default_config_path() else {
        warn!("could not determine config directory, using defaults");
        return Ok(StyleProfile::default());
    };
    Ok(load_optional(&path))
}

fn load_optional(path: &Path) -> StyleProfile {
    match fs::read_to_string(path) {
        Ok(content) => match StyleProfile::from_toml(path, &content) {
            Ok(profile) => {
                info!(path = %path.display(), "loaded style profile");
                profile
            }
            Err(error) => {
                warn!(%error, "ignoring style profile, using defaults");
                StyleProfile::default()
            }
        },
        Err(error) if error.kind() == io::ErrorKind::NotFound => StyleProfile::default(),
        Err(error) => {
            warn!(path = %path.display(), %error, "failed to read style profile, using defaults");
            StyleProfile::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_after_format() {
        let profile = StyleProfile {
            format: Some("EAN-13".to_string()),
            checksum: Some("ean13".to_string()),
            ..StyleProfile::default()
        };
        let config = profile.to_config().unwrap();
        assert_eq!(config.format, BarcodeFormat::Ean13);
        assert_eq!(config.checksum, ChecksumKind::Ean13);
    }

    #[test]
    fn test_missing_default_profile_is_empty() {
        let profile = load_optional(Path::new("/nonexistent/barcode-studio/config.toml"));
        assert_eq!(profile, StyleProfile::default());
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let profile = StyleProfile {
            scale: Some(0.0),
            ..StyleProfile::default()
        };
        assert!(matches!(
            profile.to_config(),
            Err(ConfigError::InvalidNumber { field: "scale", .. })
        ));
    }
}
