use std::fs;

use barcode_cli::report::write_csv_report;
use barcode_core::{parse_values, process_batch};
use barcode_model::{BarcodeFormat, ChecksumKind};

#[test]
fn csv_report_lists_every_value_in_order() {
    let values = parse_values("12\n123\n\n0042\nAB");
    let report = process_batch(&values, BarcodeFormat::Itf, ChecksumKind::Mod10);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");
    write_csv_report(&report, &path).unwrap();

    let csv = fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(csv, @r"
    index,input,format,checksum,valid,value,message
    0,12,ITF,mod10,true,0125,
    1,123,ITF,mod10,false,,ITF requires an even number of digits
    2,0042,ITF,mod10,true,000422,
    3,AB,ITF,mod10,false,,ITF requires an even number of digits
    ");
}

#[test]
fn report_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.csv");
    let report = process_batch(&[], BarcodeFormat::Code39, ChecksumKind::None);
    let error = write_csv_report(&report, &path).unwrap_err();
    assert!(error.to_string().starts_with("create report"));
}
