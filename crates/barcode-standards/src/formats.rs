//! Per-format metadata table.

use barcode_model::{BarcodeFormat, ChecksumKind};

use crate::registry::{ChecksumOption, FormatDescriptor};

struct Meta {
    label: &'static str,
    description: &'static str,
    valid_chars: &'static str,
    length_hint: &'static str,
}

fn meta(format: BarcodeFormat) -> Meta {
    let (label, description, valid_chars, length_hint) = match format {
        BarcodeFormat::Code39 => (
            "CODE 39",
            "Alphanumeric, widely used in industrial applications",
            "A-Z, 0-9, -, ., $, /, +, %, SPACE",
            "Any length",
        ),
        BarcodeFormat::Code93 => (
            "CODE 93",
            "Higher density than CODE 39, full ASCII support",
            "All ASCII characters",
            "Any length",
        ),
        BarcodeFormat::Code128 => (
            "CODE 128",
            "High-density, supports full ASCII",
            "All ASCII characters (0-127)",
            "Any length",
        ),
        BarcodeFormat::Ean13 => (
            "EAN-13",
            "European Article Number, retail products",
            "0-9 only",
            "12 or 13 digits",
        ),
        BarcodeFormat::Ean8 => (
            "EAN-8",
            "Short version of EAN-13",
            "0-9 only",
            "7 or 8 digits",
        ),
        BarcodeFormat::Ean5 => (
            "EAN-5",
            "UPC/EAN supplemental 5-digit add-on",
            "0-9 only",
            "Exactly 5 digits",
        ),
        BarcodeFormat::Ean2 => (
            "EAN-2",
            "UPC/EAN supplemental 2-digit add-on",
            "0-9 only",
            "Exactly 2 digits",
        ),
        BarcodeFormat::Upc => (
            "UPC-A",
            "Universal Product Code, US retail",
            "0-9 only",
            "11 or 12 digits",
        ),
        BarcodeFormat::UpcE => (
            "UPC-E",
            "Compressed UPC for small packages",
            "0-9 only",
            "6, 7, or 8 digits",
        ),
        BarcodeFormat::Itf14 => (
            "ITF-14",
            "Interleaved 2 of 5, shipping containers",
            "0-9 only",
            "13 or 14 digits",
        ),
        BarcodeFormat::Itf => (
            "ITF",
            "Interleaved 2 of 5",
            "0-9 only",
            "Even number of digits",
        ),
        BarcodeFormat::Msi => (
            "MSI",
            "Modified Plessey, inventory control",
            "0-9 only",
            "Any length",
        ),
        BarcodeFormat::Msi10 => (
            "MSI Mod 10",
            "MSI with Mod 10 check digit",
            "0-9 only",
            "Any length",
        ),
        BarcodeFormat::Msi11 => (
            "MSI Mod 11",
            "MSI with Mod 11 check digit",
            "0-9 only",
            "Any length",
        ),
        BarcodeFormat::Msi1010 => (
            "MSI Mod 1010",
            "MSI with two Mod 10 check digits",
            "0-9 only",
            "Any length",
        ),
        BarcodeFormat::Msi1110 => (
            "MSI Mod 1110",
            "MSI with Mod 11 and Mod 10 check digits",
            "0-9 only",
            "Any length",
        ),
        BarcodeFormat::Pharmacode => (
            "Pharmacode",
            "Pharmaceutical packaging",
            "0-9 only",
            "Number 3-131070",
        ),
        BarcodeFormat::Codabar => (
            "Codabar",
            "Libraries, blood banks, shipping",
            "0-9, -, $, :, /, ., +",
            "Any length",
        ),
        BarcodeFormat::QrCode => (
            "QR Code",
            "Quick Response code, widely used for URLs and data",
            "All characters",
            "Up to 4,296 chars",
        ),
        BarcodeFormat::AztecCode => (
            "Aztec Code",
            "High-density 2D barcode, used in transport tickets",
            "All ASCII characters",
            "Up to 3,832 chars",
        ),
        BarcodeFormat::DataMatrix => (
            "Data Matrix",
            "2D matrix barcode for small items",
            "All ASCII characters",
            "Up to 2,335 chars",
        ),
        BarcodeFormat::Pdf417 => (
            "PDF417",
            "Stacked linear barcode, used in IDs and shipping",
            "All ASCII characters",
            "Up to 1,850 chars",
        ),
    };
    Meta {
        label,
        description,
        valid_chars,
        length_hint,
    }
}

/// Checksums offered for `format`, `none` excluded.
fn checksum_options(format: BarcodeFormat) -> Vec<ChecksumOption> {
    let kinds: &[ChecksumKind] = match format {
        BarcodeFormat::Code39 => &[ChecksumKind::Mod43],
        BarcodeFormat::Codabar => &[
            ChecksumKind::Mod16,
            ChecksumKind::JapanNw7,
            ChecksumKind::Jrc,
            ChecksumKind::Luhn,
            ChecksumKind::Mod11Pzn,
            ChecksumKind::Mod11A,
            ChecksumKind::Mod10Weight2,
            ChecksumKind::Mod10Weight3,
            ChecksumKind::SevenCheckDr,
            ChecksumKind::Mod16Japan,
        ],
        BarcodeFormat::Ean13 => &[ChecksumKind::Ean13],
        BarcodeFormat::Upc => &[ChecksumKind::Upc],
        BarcodeFormat::Itf | BarcodeFormat::Itf14 | BarcodeFormat::Code128 => {
            &[ChecksumKind::Mod10]
        }
        BarcodeFormat::Msi => &[ChecksumKind::Mod10, ChecksumKind::Mod11],
        _ => &[],
    };

    kinds
        .iter()
        .map(|&kind| {
            let label = if format.is_interleaved() && kind == ChecksumKind::Mod10 {
                "Modulo 10 (auto-pads for even length)"
            } else {
                kind.label()
            };
            ChecksumOption { kind, label }
        })
        .collect()
}

/// Build the descriptor for one format.
pub(crate) fn describe(format: BarcodeFormat) -> FormatDescriptor {
    let Meta {
        label,
        description,
        valid_chars,
        length_hint,
    } = meta(format);

    let mut checksums = vec![ChecksumOption {
        kind: ChecksumKind::None,
        label: ChecksumKind::None.label(),
    }];
    checksums.extend(checksum_options(format));

    FormatDescriptor {
        format,
        label,
        category: format.category(),
        description,
        valid_chars,
        length_hint,
        checksums,
    }
}
