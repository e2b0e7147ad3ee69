//! Tests for the shared toolkit: cleaner, splitter, checksum algorithms,
//! date helpers and the registry.

use kennung::core::checksum::{
    Weighted, iso7064_mod_11_10_validate, iso7064_mod_97_10_validate, luhn_checksum,
    luhn_validate, mod_11_10_validate,
};
use kennung::core::{
    clean, clean_prefix, is_valid_date, is_valid_date_ddmmyy, is_valid_date_yymmdd, split_at,
};
use kennung::{Validation, ValidationError};

// ── Cleaner ─────────────────────────────────────────────────────────────────

#[test]
fn clean_strips_allowed_separators() {
    assert_eq!(clean(" 123-456 ", " -"), Ok("123456".into()));
}

#[test]
fn clean_rejects_unexpected_characters() {
    assert_eq!(clean("123#456", " -"), Err(ValidationError::InvalidFormat));
    assert_eq!(clean("123.456", " -"), Err(ValidationError::InvalidFormat));
}

#[test]
fn clean_folds_pasted_unicode() {
    // EN DASH and NO-BREAK SPACE, typical of numbers copied out of PDFs.
    assert_eq!(clean("12\u{2013}34\u{00A0}56", " -"), Ok("123456".into()));
    // Fullwidth digits as typed with an IME.
    assert_eq!(clean("\u{FF11}\u{FF12}\u{FF13}", ""), Ok("123".into()));
}

#[test]
fn clean_prefix_is_case_insensitive() {
    assert_eq!(clean_prefix("de123456789", "", &["DE"]), Ok("123456789".into()));
    assert_eq!(clean_prefix("DE123456789", "", &["DE"]), Ok("123456789".into()));
}

#[test]
fn clean_is_idempotent_on_cleaned_values() {
    for raw in [" 123-456 ", "a-b-c", "12.34", "\u{FF11}2\u{2013}3"] {
        if let Ok(once) = clean(raw, " -.") {
            assert_eq!(clean(&once, " -."), Ok(once.clone()), "re-clean of {raw:?}");
        }
    }
}

// ── Splitter ────────────────────────────────────────────────────────────────

#[test]
fn split_at_fixed_points() {
    assert_eq!(
        split_at("abcdefghijklmnop", &[3, 6, 9]),
        vec!["abc", "def", "ghi", "jklmnop"]
    );
}

#[test]
fn split_at_negative_points() {
    assert_eq!(
        split_at("211003420017", &[2, -4, -1]),
        vec!["21", "100342", "001", "7"]
    );
}

#[test]
fn split_at_tolerates_out_of_range_points() {
    assert_eq!(split_at("abc", &[10]), vec!["abc", ""]);
    assert_eq!(split_at("abc", &[-10, 2]), vec!["", "ab", "c"]);
}

// ── Checksum library ────────────────────────────────────────────────────────

#[test]
fn weighted_sum_with_negative_weight_uses_mathematical_modulus() {
    let params = Weighted::new(&[9, 8, 7, 6, 5, 4, 3, 2, -1], 11);
    assert_eq!(params.checksum("123456782"), 0);
    // Negative raw sum still reduces into 0..11.
    let raw: i64 = -9;
    assert_eq!(params.checksum("000000009"), raw.rem_euclid(11));
}

#[test]
fn luhn_vectors() {
    assert_eq!(luhn_checksum("7894"), 6);
    assert!(luhn_validate("79927398713"));
    assert!(!luhn_validate("111111111"));
}

#[test]
fn iso7064_mod_11_10_vectors() {
    assert!(iso7064_mod_11_10_validate("794623"));
    assert!(iso7064_mod_11_10_validate("002006673085"));
    assert!(!iso7064_mod_11_10_validate("00200667308"));
    assert!(!iso7064_mod_11_10_validate("002006673084"));
    assert!(!iso7064_mod_11_10_validate("002006673086"));
}

#[test]
fn iso7064_mod_97_10_vectors() {
    assert!(iso7064_mod_97_10_validate("9999123456789012141490"));
    assert!(iso7064_mod_97_10_validate("08686001256515001121751"));
    assert!(!iso7064_mod_97_10_validate("08686001256515001121752"));
}

#[test]
fn two_stage_mod_11_10_vectors() {
    for value in [
        "07945",
        "794623",
        "002006673085",
        "65112243004304827",
        "0032",
        "423280260",
        "46000342367741",
        "8537",
    ] {
        assert!(mod_11_10_validate(value), "{value} should validate");
    }
    assert!(!mod_11_10_validate("17945"));
    assert!(!mod_11_10_validate("17944"));
}

// ── Date helpers ────────────────────────────────────────────────────────────

#[test]
fn date_validity() {
    assert!(is_valid_date(2024, 2, 29));
    assert!(!is_valid_date(2023, 2, 29));
    assert!(is_valid_date_yymmdd("040229"));
    assert!(!is_valid_date_yymmdd("050229"));
    assert!(is_valid_date_ddmmyy("290204"));
    assert!(!is_valid_date_ddmmyy("300204"));
}

// ── Registry ────────────────────────────────────────────────────────────────

#[test]
fn registry_lookup_and_dispatch() {
    let validator = kennung::registry::lookup("nl/bsn").expect("nl/bsn registered");
    assert_eq!(validator.abbreviation(), Some("BSN"));
    assert!(validator.validate("111222333").is_valid());

    assert!(kennung::registry::lookup("zz/unknown").is_none());
}

#[test]
fn registry_covers_every_kind_exactly_once() {
    let keys: Vec<&str> = kennung::registry::all().map(|(key, _)| key).collect();
    let mut deduped = keys.clone();
    deduped.dedup();
    assert_eq!(keys, deduped);
    assert_eq!(keys.len(), 12);
}

#[test]
fn every_registered_validator_is_total_on_junk() {
    let junk = [
        "",
        " ",
        "0",
        "ÄÖÜ",
        "∞∞∞∞∞∞∞∞∞",
        "123456789012345678901234567890",
        "\u{0000}\u{FFFF}",
    ];
    for (key, validator) in kennung::registry::all() {
        for input in junk {
            let outcome = validator.validate(input);
            assert!(
                matches!(outcome, Validation::Invalid { .. }),
                "{key} accepted junk {input:?}"
            );
            // format must echo something back, never fail
            let _ = validator.format(input);
        }
    }
}
