use std::collections::BTreeMap;
use std::sync::LazyLock;

use barcode_model::{BarcodeError, BarcodeFormat, Category, ChecksumKind};
use serde::Serialize;

use crate::formats::describe;

/// A checksum choice as offered for one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecksumOption {
    pub kind: ChecksumKind,
    pub label: &'static str,
}

/// Static metadata of one barcode format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatDescriptor {
    pub format: BarcodeFormat,
    pub label: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub valid_chars: &'static str,
    pub length_hint: &'static str,
    /// Applicable checksums, `none` first.
    pub checksums: Vec<ChecksumOption>,
}

impl FormatDescriptor {
    pub fn applicable_checksums(&self) -> Vec<ChecksumKind> {
        self.checksums.iter().map(|option| option.kind).collect()
    }

    pub fn accepts_checksum(&self, kind: ChecksumKind) -> bool {
        self.checksums.iter().any(|option| option.kind == kind)
    }
}

/// Frozen lookup table of every supported format.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    descriptors: Vec<FormatDescriptor>,
    by_id: BTreeMap<&'static str, usize>,
}

static REGISTRY: LazyLock<FormatRegistry> = LazyLock::new(FormatRegistry::build);

impl FormatRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static FormatRegistry {
        &REGISTRY
    }

    fn build() -> Self {
        let descriptors: Vec<FormatDescriptor> =
            BarcodeFormat::ALL.into_iter().map(describe).collect();
        let by_id = descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| (descriptor.format.as_str(), index))
            .collect();
        Self { descriptors, by_id }
    }

    /// Descriptors in display order, linear formats before matrix formats.
    pub fn formats(&self) -> &[FormatDescriptor] {
        &self.descriptors
    }

    /// Descriptors of one category, in display order.
    pub fn formats_in(&self, category: Category) -> impl Iterator<Item = &FormatDescriptor> {
        self.descriptors
            .iter()
            .filter(move |descriptor| descriptor.category == category)
    }

    pub fn descriptor(&self, format: BarcodeFormat) -> &FormatDescriptor {
        // Descriptors are built from `BarcodeFormat::ALL`, which follows
        // declaration order.
        &self.descriptors[format as usize]
    }

    /// Look up a descriptor by its exact renderer identifier (e.g. `CODE39`,
    /// `qrcode`).
    pub fn lookup(&self, id: &str) -> Result<&FormatDescriptor, BarcodeError> {
        self.by_id
            .get(id)
            .map(|&index| &self.descriptors[index])
            .ok_or_else(|| BarcodeError::UnknownFormat {
                name: id.to_string(),
            })
    }
}

/// All formats in display order.
pub fn list_formats() -> &'static [FormatDescriptor] {
    FormatRegistry::global().formats()
}

pub fn descriptor(format: BarcodeFormat) -> &'static FormatDescriptor {
    FormatRegistry::global().descriptor(format)
}

pub fn is_two_dimensional(format: BarcodeFormat) -> bool {
    descriptor(format).category == Category::Matrix
}

/// Checksums applicable to `format`, beginning with `none`.
pub fn applicable_checksums(format: BarcodeFormat) -> Vec<ChecksumKind> {
    descriptor(format).applicable_checksums()
}

pub fn is_applicable(format: BarcodeFormat, kind: ChecksumKind) -> bool {
    descriptor(format).accepts_checksum(kind)
}

/// Applicable checksums for a format given by identifier.
pub fn applicable_checksums_for(id: &str) -> Result<Vec<ChecksumKind>, BarcodeError> {
    Ok(FormatRegistry::global().lookup(id)?.applicable_checksums())
}
