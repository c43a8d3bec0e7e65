#![deny(unsafe_code)]

pub mod issue;
pub mod rules;

use barcode_model::{BarcodeFormat, ValidationResult};
use tracing::trace;

pub use crate::issue::Issue;
pub use crate::rules::check;

/// Validate `text` for `format`, reporting the first failed rule.
pub fn validate(text: &str, format: BarcodeFormat) -> ValidationResult {
    match check(text, format) {
        Ok(()) => ValidationResult::ok(),
        Err(issue) => {
            trace!(format = %format, issue = ?issue, "input rejected");
            ValidationResult::invalid(issue.message())
        }
    }
}
