//! Library side of the barcode-studio CLI.

pub mod config;
pub mod logging;
pub mod report;
