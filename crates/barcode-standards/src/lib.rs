#![deny(unsafe_code)]

mod formats;
pub mod registry;

pub use crate::registry::{
    ChecksumOption, FormatDescriptor, FormatRegistry, applicable_checksums,
    applicable_checksums_for, descriptor, is_applicable, is_two_dimensional, list_formats,
};
