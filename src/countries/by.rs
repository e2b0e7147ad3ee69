//! Belarusian identifier numbers.

use crate::core::checksum::{ALPHANUMERIC, Weighted};
use crate::core::{Validation, ValidationError, Validator, clean_prefix, is_digits, split_at};

static UNP_PREFIXES: &[&str] = &["УНП", "UNP"];
static UNP_WEIGHTS: &[i64] = &[29, 23, 19, 17, 13, 7, 5, 3];

/// Letters permitted in the region position of a personal UNP.
static REGION_LETTERS: &str = "1234567ABCEHKM";
/// Letters permitted in the registration-type position.
static TYPE_LETTERS: &str = "ABCEHKMOPT";

/// UNP (Учетный номер плательщика, the Belarusian taxpayer number).
///
/// Nine characters: a region code, a registration-type code, six serial
/// digits and a weighted check digit. Organisation numbers are fully
/// numeric; personal numbers carry letters in the first two positions,
/// which are refolded to digits before the checksum.
pub struct Unp;

fn unp_clean(input: &str) -> Result<String, ValidationError> {
    clean_prefix(input, " -/", UNP_PREFIXES)
}

impl Validator for Unp {
    fn name(&self) -> &'static str {
        "Belarusian Taxpayer Number"
    }

    fn local_name(&self) -> &'static str {
        "Учетный номер плательщика"
    }

    fn abbreviation(&self) -> Option<&'static str> {
        Some("УНП (UNP)")
    }

    fn compact(&self, input: &str) -> Result<String, ValidationError> {
        unp_clean(input)
    }

    fn format(&self, input: &str) -> String {
        unp_clean(input).unwrap_or_else(|_| input.to_string())
    }

    fn validate(&self, input: &str) -> Validation {
        let value = match unp_clean(input) {
            Ok(value) => value,
            Err(error) => return error.into(),
        };
        if value.len() != 9 {
            return ValidationError::InvalidLength.into();
        }
        if !is_digits(&value[2..]) {
            return ValidationError::InvalidFormat.into();
        }
        let region = value.as_bytes()[0] as char;
        let kind = value.as_bytes()[1] as char;
        if !region.is_ascii_digit() && !REGION_LETTERS.contains(region) {
            return ValidationError::InvalidFormat.into();
        }
        if !kind.is_ascii_digit() && !TYPE_LETTERS.contains(kind) {
            return ValidationError::InvalidFormat.into();
        }

        let parts = split_at(&value, &[-1]);
        let (front, check) = (parts[0], parts[1]);

        // Personal numbers fold the type letter to its position in the
        // letter table before summing.
        let folded;
        let front = if kind.is_ascii_alphabetic() {
            let kind_value = TYPE_LETTERS.find(kind).unwrap_or(0);
            folded = format!("{region}{kind_value}{}", &front[2..]);
            folded.as_str()
        } else {
            front
        };

        let sum = Weighted::new(UNP_WEIGHTS, 11)
            .with_alphabet(ALPHANUMERIC)
            .checksum(front);
        if sum == 10 || check != sum.to_string() {
            return ValidationError::InvalidChecksum.into();
        }
        Validation::individual_or_company(value)
    }
}
