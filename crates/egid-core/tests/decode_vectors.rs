//! # Decoder Vector Tests
//!
//! End-to-end vectors through the public API: raw OCR-shaped strings in,
//! fully populated records or typed failures out. These pin the exact
//! behavior downstream consumers serialize and display, including the
//! flat export mapping and the unknown-governorate policy.

use egid_core::{decode, Century, DecodeError, Gender, Governorate, NationalIdNumber};

#[test]
fn reference_identity_decodes_field_for_field() {
    let decoded = decode("29902230123451").expect("reference vector must decode");

    assert_eq!(decoded.national_id.as_str(), "29902230123451");
    assert_eq!(decoded.century, Century::Twentieth);
    assert_eq!(decoded.birth_year, 1999);
    assert_eq!(decoded.birth_month, 2);
    assert_eq!(decoded.birth_day, 23);
    assert_eq!(decoded.governorate_code, "01");
    assert_eq!(decoded.governorate, Some(Governorate::Cairo));
    assert_eq!(decoded.governorate_name(), "Cairo");
    assert_eq!(decoded.sequence, "234");
    assert_eq!(decoded.gender, Gender::Male);
    assert_eq!(decoded.check_digit, 1);
    assert_eq!(decoded.birth_date(), "1999-02-23");
}

#[test]
fn rejection_vectors() {
    let cases: &[(&str, DecodeError)] = &[
        (
            "15012230123451",
            DecodeError::InvalidCenturyCode('1'),
        ),
        (
            "99012230123451",
            DecodeError::InvalidCenturyCode('9'),
        ),
        ("29913230123451", DecodeError::InvalidMonth(13)),
        ("29900230123451", DecodeError::InvalidMonth(0)),
        ("29902320123451", DecodeError::InvalidDay(32)),
        ("29902000123451", DecodeError::InvalidDay(0)),
    ];

    for (input, expected) in cases {
        assert_eq!(&decode(input).unwrap_err(), expected, "input: {input}");
    }
}

#[test]
fn malformed_inputs_are_invalid_format() {
    let inputs = [
        "",
        "2990223012345",
        "299022301234511",
        "2990223012345 ",
        "29902-30123451",
        "٢٩٩٠٢٢٣٠١٢٣٤٥١",
        "not-an-id-here",
    ];

    for input in inputs {
        assert!(
            matches!(decode(input), Err(DecodeError::InvalidFormat(_))),
            "input: {input:?}"
        );
    }
}

#[test]
fn unknown_governorate_is_not_a_failure() {
    let decoded = decode("30101019955552").expect("unknown code must still decode");
    assert_eq!(decoded.governorate_code, "99");
    assert_eq!(decoded.governorate, None);
    assert_eq!(decoded.governorate_name(), "Unknown");
    assert_eq!(decoded.to_fields()["governorate"], "Unknown");
}

#[test]
fn flat_export_matches_json_shape() {
    let fields = decode("29902230123451").unwrap().to_fields();
    let json = serde_json::to_value(&fields).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "national_id": "29902230123451",
            "century": "1900s",
            "birth_year": "1999",
            "birth_month": "2",
            "birth_day": "23",
            "birth_date": "1999-02-23",
            "governorate_code": "01",
            "governorate": "Cairo",
            "sequence": "234",
            "gender": "Male",
            "check_digit": "1",
        })
    );
}

#[test]
fn record_json_roundtrips_through_validated_newtype() {
    let decoded = decode("30501152101231").unwrap();
    let json = serde_json::to_string(&decoded).unwrap();
    let back: egid_core::DecodedIdentity = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, back);

    // The embedded ID re-validates on the way back in.
    let tampered = json.replace("30501152101231", "3050115210123x");
    assert!(serde_json::from_str::<egid_core::DecodedIdentity>(&tampered).is_err());
}

#[test]
fn parse_then_decode_equals_decode() {
    let id = NationalIdNumber::parse("29902230123451").unwrap();
    assert_eq!(id.decode().unwrap(), decode("29902230123451").unwrap());
}
