//! Barcode symbology identifiers.
//!
//! Identifiers follow the names the symbology renderers accept: upper case
//! for most linear formats, lower case for `pharmacode`,
//! `codabar` and the matrix formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BarcodeError;

/// Symbol geometry of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Linear symbol: a single row of bars.
    #[serde(rename = "1D")]
    Linear,
    /// Matrix or stacked symbol.
    #[serde(rename = "2D")]
    Matrix,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Linear => "1D",
            Category::Matrix => "2D",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A barcode symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BarcodeFormat {
    #[serde(rename = "CODE39")]
    Code39,
    #[serde(rename = "CODE93")]
    Code93,
    #[serde(rename = "CODE128")]
    Code128,
    #[serde(rename = "EAN13")]
    Ean13,
    #[serde(rename = "EAN8")]
    Ean8,
    #[serde(rename = "EAN5")]
    Ean5,
    #[serde(rename = "EAN2")]
    Ean2,
    /// UPC-A.
    #[serde(rename = "UPC")]
    Upc,
    #[serde(rename = "UPCE")]
    UpcE,
    #[serde(rename = "ITF14")]
    Itf14,
    /// Interleaved 2 of 5.
    #[serde(rename = "ITF")]
    Itf,
    #[serde(rename = "MSI")]
    Msi,
    #[serde(rename = "MSI10")]
    Msi10,
    #[serde(rename = "MSI11")]
    Msi11,
    #[serde(rename = "MSI1010")]
    Msi1010,
    #[serde(rename = "MSI1110")]
    Msi1110,
    #[serde(rename = "pharmacode")]
    Pharmacode,
    #[serde(rename = "codabar")]
    Codabar,
    #[serde(rename = "qrcode")]
    QrCode,
    #[serde(rename = "azteccode")]
    AztecCode,
    #[serde(rename = "datamatrix")]
    DataMatrix,
    #[serde(rename = "pdf417")]
    Pdf417,
}

impl BarcodeFormat {
    /// Every format, linear formats first.
    pub const ALL: [BarcodeFormat; 22] = [
        BarcodeFormat::Code39,
        BarcodeFormat::Code93,
        BarcodeFormat::Code128,
        BarcodeFormat::Ean13,
        BarcodeFormat::Ean8,
        BarcodeFormat::Ean5,
        BarcodeFormat::Ean2,
        BarcodeFormat::Upc,
        BarcodeFormat::UpcE,
        BarcodeFormat::Itf14,
        BarcodeFormat::Itf,
        BarcodeFormat::Msi,
        BarcodeFormat::Msi10,
        BarcodeFormat::Msi11,
        BarcodeFormat::Msi1010,
        BarcodeFormat::Msi1110,
        BarcodeFormat::Pharmacode,
        BarcodeFormat::Codabar,
        BarcodeFormat::QrCode,
        BarcodeFormat::AztecCode,
        BarcodeFormat::DataMatrix,
        BarcodeFormat::Pdf417,
    ];

    /// Identifier as understood by the symbology renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeFormat::Code39 => "CODE39",
            BarcodeFormat::Code93 => "CODE93",
            BarcodeFormat::Code128 => "CODE128",
            BarcodeFormat::Ean13 => "EAN13",
            BarcodeFormat::Ean8 => "EAN8",
            BarcodeFormat::Ean5 => "EAN5",
            BarcodeFormat::Ean2 => "EAN2",
            BarcodeFormat::Upc => "UPC",
            BarcodeFormat::UpcE => "UPCE",
            BarcodeFormat::Itf14 => "ITF14",
            BarcodeFormat::Itf => "ITF",
            BarcodeFormat::Msi => "MSI",
            BarcodeFormat::Msi10 => "MSI10",
            BarcodeFormat::Msi11 => "MSI11",
            BarcodeFormat::Msi1010 => "MSI1010",
            BarcodeFormat::Msi1110 => "MSI1110",
            BarcodeFormat::Pharmacode => "pharmacode",
            BarcodeFormat::Codabar => "codabar",
            BarcodeFormat::QrCode => "qrcode",
            BarcodeFormat::AztecCode => "azteccode",
            BarcodeFormat::DataMatrix => "datamatrix",
            BarcodeFormat::Pdf417 => "pdf417",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            BarcodeFormat::QrCode
            | BarcodeFormat::AztecCode
            | BarcodeFormat::DataMatrix
            | BarcodeFormat::Pdf417 => Category::Matrix,
            _ => Category::Linear,
        }
    }

    pub fn is_two_dimensional(&self) -> bool {
        self.category() == Category::Matrix
    }

    /// Interleaved symbologies encode digit pairs and need an even digit count.
    pub fn is_interleaved(&self) -> bool {
        matches!(self, BarcodeFormat::Itf | BarcodeFormat::Itf14)
    }

    /// Formats whose alphabet is restricted to decimal digits.
    pub fn is_numeric_only(&self) -> bool {
        matches!(
            self,
            BarcodeFormat::Ean13
                | BarcodeFormat::Ean8
                | BarcodeFormat::Ean5
                | BarcodeFormat::Ean2
                | BarcodeFormat::Upc
                | BarcodeFormat::UpcE
                | BarcodeFormat::Itf14
                | BarcodeFormat::Itf
                | BarcodeFormat::Msi
                | BarcodeFormat::Msi10
                | BarcodeFormat::Msi11
                | BarcodeFormat::Msi1010
                | BarcodeFormat::Msi1110
                | BarcodeFormat::Pharmacode
        )
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BarcodeFormat {
    type Err = BarcodeError;

    /// Parse a format identifier.
    ///
    /// Matching ignores case and the separators found in display labels, so
    /// `CODE39`, `code 39` and `Code-39` all resolve to the same format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_uppercase();

        let format = match normalized.as_str() {
            "UPCA" => Some(BarcodeFormat::Upc),
            "QR" => Some(BarcodeFormat::QrCode),
            "AZTEC" => Some(BarcodeFormat::AztecCode),
            other => BarcodeFormat::ALL
                .into_iter()
                .find(|format| format.as_str().eq_ignore_ascii_case(other)),
        };

        format.ok_or_else(|| BarcodeError::UnknownFormat {
            name: s.to_string(),
        })
    }
}
