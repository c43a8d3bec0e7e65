//! CSV report for batch runs.

use std::path::Path;

use anyhow::{Context, Result};
use barcode_core::BatchReport;

/// Write one row per batch value, in input order.
pub fn write_csv_report(report: &BatchReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create report {}", path.display()))?;
    for record in report.records() {
        writer
            .serialize(&record)
            .with_context(|| format!("write report row {}", record.index))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush report {}", path.display()))?;
    Ok(())
}
