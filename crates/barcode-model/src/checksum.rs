//! Check digit algorithm identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BarcodeError;

/// A check digit algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecksumKind {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "mod10")]
    Mod10,
    #[serde(rename = "mod11")]
    Mod11,
    #[serde(rename = "mod43")]
    Mod43,
    #[serde(rename = "mod16")]
    Mod16,
    #[serde(rename = "japanNW7")]
    JapanNw7,
    #[serde(rename = "jrc")]
    Jrc,
    #[serde(rename = "luhn")]
    Luhn,
    #[serde(rename = "mod11PZN")]
    Mod11Pzn,
    #[serde(rename = "mod11A")]
    Mod11A,
    #[serde(rename = "mod10Weight2")]
    Mod10Weight2,
    #[serde(rename = "mod10Weight3")]
    Mod10Weight3,
    #[serde(rename = "7CheckDR")]
    SevenCheckDr,
    #[serde(rename = "mod16Japan")]
    Mod16Japan,
    #[serde(rename = "ean13")]
    Ean13,
    #[serde(rename = "upc")]
    Upc,
}

/// Which inputs an algorithm produces a meaningful check character for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDomain {
    /// Any text; characters outside the algorithm alphabet are ignored.
    Alphabet,
    /// Decimal digits only.
    Digits,
    /// Decimal digits, at least this many of them.
    DigitsAtLeast(usize),
}

impl InputDomain {
    /// Returns true if `input` lies inside this domain.
    pub fn accepts(&self, input: &str) -> bool {
        let all_digits = !input.is_empty() && input.chars().all(|c| c.is_ascii_digit());
        match self {
            InputDomain::Alphabet => true,
            InputDomain::Digits => all_digits,
            InputDomain::DigitsAtLeast(min) => all_digits && input.len() >= *min,
        }
    }
}

impl ChecksumKind {
    /// Every kind, `None` first.
    pub const ALL: [ChecksumKind; 16] = [
        ChecksumKind::None,
        ChecksumKind::Mod10,
        ChecksumKind::Mod11,
        ChecksumKind::Mod43,
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
        ChecksumKind::Ean13,
        ChecksumKind::Upc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumKind::None => "none",
            ChecksumKind::Mod10 => "mod10",
            ChecksumKind::Mod11 => "mod11",
            ChecksumKind::Mod43 => "mod43",
            ChecksumKind::Mod16 => "mod16",
            ChecksumKind::JapanNw7 => "japanNW7",
            ChecksumKind::Jrc => "jrc",
            ChecksumKind::Luhn => "luhn",
            ChecksumKind::Mod11Pzn => "mod11PZN",
            ChecksumKind::Mod11A => "mod11A",
            ChecksumKind::Mod10Weight2 => "mod10Weight2",
            ChecksumKind::Mod10Weight3 => "mod10Weight3",
            ChecksumKind::SevenCheckDr => "7CheckDR",
            ChecksumKind::Mod16Japan => "mod16Japan",
            ChecksumKind::Ean13 => "ean13",
            ChecksumKind::Upc => "upc",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            ChecksumKind::None => "None",
            ChecksumKind::Mod10 => "Modulo 10",
            ChecksumKind::Mod11 => "Modulo 11",
            ChecksumKind::Mod43 => "Modulo 43",
            ChecksumKind::Mod16 => "Modulo 16",
            ChecksumKind::JapanNw7 => "Japan NW-7",
            ChecksumKind::Jrc => "JRC",
            ChecksumKind::Luhn => "Luhn",
            ChecksumKind::Mod11Pzn => "Modulo 11 PZN",
            ChecksumKind::Mod11A => "Modulo 11-A",
            ChecksumKind::Mod10Weight2 => "Modulo 10 Weight 2",
            ChecksumKind::Mod10Weight3 => "Modulo 10 Weight 3",
            ChecksumKind::SevenCheckDr => "7 Check DR",
            ChecksumKind::Mod16Japan => "Modulo 16 Japan",
            ChecksumKind::Ean13 => "EAN-13 Check",
            ChecksumKind::Upc => "UPC-A Modulo 10",
        }
    }

    pub fn input_domain(&self) -> InputDomain {
        match self {
            ChecksumKind::None
            | ChecksumKind::Mod43
            | ChecksumKind::Mod16
            | ChecksumKind::JapanNw7
            | ChecksumKind::Mod16Japan => InputDomain::Alphabet,
            ChecksumKind::Ean13 => InputDomain::DigitsAtLeast(12),
            ChecksumKind::Upc => InputDomain::DigitsAtLeast(11),
            _ => InputDomain::Digits,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ChecksumKind::None)
    }
}

impl fmt::Display for ChecksumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChecksumKind {
    type Err = BarcodeError;

    /// Parse a checksum identifier, ignoring case and `-`/`_`/space separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        let kind = match normalized.as_str() {
            "" | "off" => Some(ChecksumKind::None),
            "nw7" => Some(ChecksumKind::JapanNw7),
            "pzn" => Some(ChecksumKind::Mod11Pzn),
            "upca" => Some(ChecksumKind::Upc),
            other => ChecksumKind::ALL
                .into_iter()
                .find(|kind| kind.as_str().eq_ignore_ascii_case(other)),
        };

        kind.ok_or_else(|| BarcodeError::UnknownChecksum {
            name: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_from_str() {
        assert_eq!(
            "japanNW7".parse::<ChecksumKind>().unwrap(),
            ChecksumKind::JapanNw7
        );
        assert_eq!(
            "MOD11-PZN".parse::<ChecksumKind>().unwrap(),
            ChecksumKind::Mod11Pzn
        );
        assert_eq!(
            "7checkdr".parse::<ChecksumKind>().unwrap(),
            ChecksumKind::SevenCheckDr
        );
        assert!("mod97".parse::<ChecksumKind>().is_err());
    }

    #[test]
    fn test_input_domain() {
        assert!(InputDomain::Digits.accepts("0123"));
        assert!(!InputDomain::Digits.accepts("12A"));
        assert!(!InputDomain::Digits.accepts(""));
        assert!(InputDomain::Alphabet.accepts("abc"));
        assert!(!InputDomain::DigitsAtLeast(12).accepts("12345678901"));
        assert!(InputDomain::DigitsAtLeast(11).accepts("12345678901"));
    }

    #[test]
    fn test_serde_identifiers() {
        let json = serde_json::to_string(&ChecksumKind::SevenCheckDr).unwrap();
        assert_eq!(json, "\"7CheckDR\"");
        let kind: ChecksumKind = serde_json::from_str("\"mod10Weight2\"").unwrap();
        assert_eq!(kind, ChecksumKind::Mod10Weight2);
    }
}
