use barcode_core::{PrepareError, Session, normalize_for_rendering, prepare};
use barcode_model::{BarcodeFormat, ChecksumKind, QualityLevel};
use barcode_standards::applicable_checksums;
use proptest::prelude::*;

#[test]
fn render_request_snapshot() {
    let mut session = Session::new();
    session.set_format(BarcodeFormat::Itf);
    session.set_text("12");
    session.set_checksum(ChecksumKind::Mod10);
    session.set_scale(0.5);
    session.set_quality(QualityLevel::B);

    let request = session.render_request().unwrap();
    let json = serde_json::to_string_pretty(&request).unwrap();
    insta::assert_snapshot!(json, @r##"
    {
      "value": "0125",
      "format": "ITF",
      "style": {
        "width": 1.0,
        "height": 50.0,
        "margin": 5.0,
        "fontSize": 8.0,
        "displayValue": true,
        "lineColor": "#000000",
        "background": "#FFFFFF"
      },
      "quality": "B"
    }
    "##);
}

#[test]
fn every_applicable_checksum_prepares_a_valid_value() {
    let samples = [
        (BarcodeFormat::Code39, "HELLO-39"),
        (BarcodeFormat::Code128, "12345"),
        (BarcodeFormat::Ean13, "590123412345"),
        (BarcodeFormat::Upc, "03600029145"),
        (BarcodeFormat::Itf, "1234"),
        (BarcodeFormat::Itf14, "1234567890123"),
        (BarcodeFormat::Msi, "80523"),
        (BarcodeFormat::Codabar, "A40156B"),
    ];
    for (format, text) in samples {
        for kind in applicable_checksums(format) {
            let prepared = prepare(text, format, kind).unwrap();
            assert!(prepared.encoded.contains(text), "{format} {kind}");
        }
    }
}

#[test]
fn pharmacode_is_canonicalized() {
    let prepared = prepare(" 0042", BarcodeFormat::Pharmacode, ChecksumKind::None).unwrap();
    assert_eq!(prepared.value, "42");
    assert_eq!(
        prepare("2", BarcodeFormat::Pharmacode, ChecksumKind::None).unwrap_err(),
        PrepareError::FormatConstraint {
            format: BarcodeFormat::Pharmacode,
            issue: barcode_validate::Issue::PharmacodeRange,
        }
    );
}

proptest! {
    #[test]
    fn normalization_is_idempotent(text in "\\PC{0,24}") {
        for format in BarcodeFormat::ALL {
            let once = normalize_for_rendering(&text, format);
            prop_assert_eq!(normalize_for_rendering(&once, format), once.clone());
        }
    }

    #[test]
    fn code39_values_render_inside_the_alphabet(text in "[a-zA-Z0-9 .$/+%-]{1,20}") {
        prop_assume!(!text.trim().is_empty());
        let prepared = prepare(&text, BarcodeFormat::Code39, ChecksumKind::Mod43).unwrap();
        prop_assert!(prepared
            .value
            .chars()
            .all(|c| barcode_checksum::alphabet::CODE39_ALPHABET.contains(c)));
    }
}
