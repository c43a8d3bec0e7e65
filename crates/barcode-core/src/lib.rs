//! Encoding pipeline for barcode values.
//!
//! [`prepare`] turns user text into the value a symbology renderer draws:
//! the text is validated for its format, the selected checksum is applied
//! and the result is normalized to the renderer alphabet. [`Session`]
//! wraps the same steps around an editable [`BarcodeConfig`], and the
//! [`batch`] module runs them over many values at once.
//!
//! [`BarcodeConfig`]: barcode_model::BarcodeConfig

#![deny(unsafe_code)]

pub mod batch;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod session;

pub use batch::{
    BatchItem, BatchRecord, BatchReport, parse_values, process_batch, process_batch_with,
    random_value_length, random_values,
};
pub use normalize::normalize_for_rendering;
pub use pipeline::{PrepareError, PreparedValue, prepare};
pub use render::RenderRequest;
pub use session::Session;
