//! Many values, one format: parsing, random generation and parallel
//! preparation.

use barcode_model::{BarcodeFormat, ChecksumKind};
use rand::Rng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::pipeline::{PrepareError, PreparedValue, prepare};

const DIGITS: &[u8] = b"0123456789";
const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One value per line, trimmed, blank lines dropped.
pub fn parse_values(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Length random values get for `format` when `requested` is asked for.
///
/// Fixed-length retail formats get their data length (the check digit is
/// left to the checksum step). ITF lengths are rounded down to even.
pub fn random_value_length(format: BarcodeFormat, requested: usize) -> usize {
    match format {
        BarcodeFormat::Ean13 => 12,
        BarcodeFormat::Ean8 => 7,
        BarcodeFormat::Upc => 11,
        BarcodeFormat::Itf14 => 13,
        BarcodeFormat::Itf if requested % 2 != 0 => requested.saturating_sub(1).max(2),
        _ => requested,
    }
}

/// Generate `count` random values suited to `format`.
pub fn random_values<R: Rng + ?Sized>(
    format: BarcodeFormat,
    count: usize,
    length: usize,
    rng: &mut R,
) -> Vec<String> {
    let alphabet = if format.is_numeric_only() {
        DIGITS
    } else {
        ALPHANUMERIC
    };
    let length = random_value_length(format, length);
    debug!(format = %format, count, length, "generating random values");

    (0..count)
        .map(|_| {
            (0..length)
                .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
                .collect()
        })
        .collect()
}

/// Outcome for one batch value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub index: usize,
    pub input: String,
    pub outcome: Result<PreparedValue, PrepareError>,
}

impl BatchItem {
    pub fn is_prepared(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Render-ready value, or the empty string for rejected input.
    pub fn value(&self) -> &str {
        match &self.outcome {
            Ok(prepared) => &prepared.value,
            Err(_) => "",
        }
    }

    /// Rejection message, or the empty string for prepared input.
    pub fn message(&self) -> String {
        match &self.outcome {
            Ok(_) => String::new(),
            Err(error) => error.to_string(),
        }
    }
}

/// Flattened batch row for CSV and JSON reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord<'a> {
    pub index: usize,
    pub input: &'a str,
    pub format: &'static str,
    pub checksum: &'static str,
    pub valid: bool,
    pub value: &'a str,
    pub message: String,
}

/// Results of one batch run, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub format: BarcodeFormat,
    pub checksum: ChecksumKind,
    pub items: Vec<BatchItem>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn prepared_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_prepared()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.total() - self.prepared_count()
    }

    pub fn prepared(&self) -> impl Iterator<Item = &PreparedValue> {
        self.items.iter().filter_map(|item| item.outcome.as_ref().ok())
    }

    pub fn records(&self) -> impl Iterator<Item = BatchRecord<'_>> {
        self.items.iter().map(|item| BatchRecord {
            index: item.index,
            input: &item.input,
            format: self.format.as_str(),
            checksum: self.checksum.as_str(),
            valid: item.is_prepared(),
            value: item.value(),
            message: item.message(),
        })
    }
}

/// Prepare every value independently. Values are processed in parallel;
/// the report keeps input order.
pub fn process_batch(values: &[String], format: BarcodeFormat, checksum: ChecksumKind) -> BatchReport {
    process_batch_with(values, format, checksum, |_| {})
}

/// As [`process_batch`], calling `on_item` once per finished value (from
/// worker threads, in completion order).
pub fn process_batch_with<F>(
    values: &[String],
    format: BarcodeFormat,
    checksum: ChecksumKind,
    on_item: F,
) -> BatchReport
where
    F: Fn(&BatchItem) + Sync,
{
    let span = info_span!("batch", format = %format, checksum = %checksum, count = values.len());
    let _guard = span.enter();

    let items: Vec<BatchItem> = values
        .par_iter()
        .enumerate()
        .map(|(index, input)| {
            let item = BatchItem {
                index,
                input: input.clone(),
                outcome: prepare(input, format, checksum),
            };
            on_item(&item);
            item
        })
        .collect();

    let report = BatchReport {
        format,
        checksum,
        items,
    };
    info!(
        total = report.total(),
        prepared = report.prepared_count(),
        rejected = report.rejected_count(),
        "batch complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_values_trims_and_drops_blanks() {
        let values = parse_values("  A1 \n\n\tB2\r\n   \nC3");
        assert_eq!(values, ["A1", "B2", "C3"]);
    }

    #[test]
    fn test_random_lengths() {
        assert_eq!(random_value_length(BarcodeFormat::Ean13, 8), 12);
        assert_eq!(random_value_length(BarcodeFormat::Ean8, 8), 7);
        assert_eq!(random_value_length(BarcodeFormat::Upc, 3), 11);
        assert_eq!(random_value_length(BarcodeFormat::Itf14, 8), 13);
        assert_eq!(random_value_length(BarcodeFormat::Itf, 9), 8);
        assert_eq!(random_value_length(BarcodeFormat::Itf, 1), 2);
        assert_eq!(random_value_length(BarcodeFormat::Itf, 6), 6);
        assert_eq!(random_value_length(BarcodeFormat::Code128, 5), 5);
    }

    #[test]
    fn test_random_values_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let numeric = random_values(BarcodeFormat::Msi, 20, 6, &mut rng);
        assert_eq!(numeric.len(), 20);
        assert!(numeric.iter().all(|v| v.len() == 6 && v.bytes().all(|b| b.is_ascii_digit())));

        let alnum = random_values(BarcodeFormat::Code39, 20, 10, &mut rng);
        assert!(alnum.iter().all(|v| {
            v.len() == 10 && v.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
        }));
    }

    #[test]
    fn test_random_values_are_seed_deterministic() {
        let a = random_values(BarcodeFormat::Code128, 5, 8, &mut StdRng::seed_from_u64(42));
        let b = random_values(BarcodeFormat::Code128, 5, 8, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_process_batch_keeps_order_and_counts() {
        let values = parse_values("590123412345\nABC\n400638133393\n\n12");
        let report = process_batch(&values, BarcodeFormat::Ean13, ChecksumKind::Ean13);
        assert_eq!(report.total(), 4);
        assert_eq!(report.prepared_count(), 2);
        assert_eq!(report.rejected_count(), 2);
        let inputs: Vec<&str> = report.items.iter().map(|item| item.input.as_str()).collect();
        assert_eq!(inputs, ["590123412345", "ABC", "400638133393", "12"]);
        assert_eq!(report.items[0].value(), "5901234123457");
        assert_eq!(report.items[2].value(), "4006381333931");
        assert_eq!(
            report.items[1].message(),
            "EAN-13 requires exactly 12 or 13 digits"
        );
    }

    #[test]
    fn test_process_batch_reports_each_item() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let values: Vec<String> = (0..50).map(|i| format!("{i:04}")).collect();
        let seen = AtomicUsize::new(0);
        let report = process_batch_with(&values, BarcodeFormat::Itf, ChecksumKind::Mod10, |_| {
            seen.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(seen.load(Ordering::Relaxed), 50);
        assert!(report.items.iter().enumerate().all(|(i, item)| item.index == i));
        assert!(report.prepared().all(|p| p.value.len() % 2 == 0));
    }
}
