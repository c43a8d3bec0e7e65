pub mod checksum;
pub mod config;
pub mod error;
pub mod format;
pub mod text;
pub mod validation;

pub use checksum::{ChecksumKind, InputDomain};
pub use config::{BarcodeConfig, QualityLevel, RenderStyle, SCALE_PRESETS, is_hex_color};
pub use error::{BarcodeError, Result};
pub use format::{BarcodeFormat, Category};
pub use text::{is_blank, parse_int_prefix};
pub use validation::ValidationResult;
