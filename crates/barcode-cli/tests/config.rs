use std::fs;

use barcode_cli::config::{ConfigError, StyleProfile, load_profile};
use barcode_model::{BarcodeFormat, ChecksumKind, QualityLevel};

fn write_profile(content: &str) -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp file");
    fs::write(file.path(), content).expect("write profile");
    file
}

#[test]
fn explicit_profile_overrides_defaults() {
    let file = write_profile(
        r##"
format = "itf-14"
checksum = "mod10"
quality = "low"
scale = 2.0

[style]
width = 3
font_size = 12
display_value = false
line_color = "#1a1a1a"
"##,
    );

    let profile = load_profile(Some(file.path())).unwrap();
    let config = profile.to_config().unwrap();
    assert_eq!(config.format, BarcodeFormat::Itf14);
    assert_eq!(config.checksum, ChecksumKind::Mod10);
    assert_eq!(config.quality, QualityLevel::C);
    assert_eq!(config.scale, 2.0);
    assert_eq!(config.style.width, 3.0);
    assert_eq!(config.style.font_size, 12.0);
    assert!(!config.style.display_value);
    assert_eq!(config.style.line_color, "#1A1A1A");
    // Untouched fields keep their defaults.
    assert_eq!(config.style.height, 100.0);
    assert_eq!(config.style.background, "#FFFFFF");
    assert_eq!(config.text, "BARCODE123");
}

#[test]
fn empty_profile_is_default_config() {
    let file = write_profile("");
    let profile = load_profile(Some(file.path())).unwrap();
    assert_eq!(profile, StyleProfile::default());
    assert_eq!(
        profile.to_config().unwrap(),
        barcode_model::BarcodeConfig::default()
    );
}

#[test]
fn missing_explicit_profile_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let error = load_profile(Some(&path)).unwrap_err();
    assert!(matches!(error, ConfigError::Read { .. }));
}

#[test]
fn malformed_profile_is_an_error() {
    let file = write_profile("format = [");
    assert!(matches!(
        load_profile(Some(file.path())).unwrap_err(),
        ConfigError::Parse { .. }
    ));

    let unknown_key = write_profile("colour = \"red\"");
    assert!(matches!(
        load_profile(Some(unknown_key.path())).unwrap_err(),
        ConfigError::Parse { .. }
    ));
}

#[test]
fn invalid_values_are_rejected() {
    let bad_color = write_profile("[style]\nbackground = \"white\"");
    let error = load_profile(Some(bad_color.path())).unwrap_err();
    assert_eq!(
        error.to_string(),
        "style.background must be a #RRGGBB color, got \"white\""
    );

    let bad_format = write_profile("format = \"CODE11\"");
    assert!(matches!(
        load_profile(Some(bad_format.path())).unwrap_err(),
        ConfigError::Unknown {
            field: "format",
            ..
        }
    ));

    let bad_scale = write_profile("scale = -1.0");
    assert!(matches!(
        load_profile(Some(bad_scale.path())).unwrap_err(),
        ConfigError::InvalidNumber { field: "scale", .. }
    ));
}
