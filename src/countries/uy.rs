//! Uruguayan identifier numbers.

use crate::core::checksum::Weighted;
use crate::core::{Validation, ValidationError, Validator, clean_prefix, is_digits, split_at};

static RUT_WEIGHTS: &[i64] = &[4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// RUT (Registro Único Tributario, the Uruguayan tax number for legal
/// entities).
///
/// Twelve digits: a two-digit registration office (01–21), a six-digit
/// serial, the literal establishment group `001` and a check digit. The
/// check digit is the negated weighted sum mod 11; a derived value of 10
/// can never match and such numbers are simply invalid.
pub struct Rut;

fn rut_clean(input: &str) -> Result<String, ValidationError> {
    clean_prefix(input, " -", &["UY"])
}

impl Validator for Rut {
    fn name(&self) -> &'static str {
        "Uruguayan Tax Number"
    }

    fn local_name(&self) -> &'static str {
        "Registro Único Tributario"
    }

    fn abbreviation(&self) -> Option<&'static str> {
        Some("RUT")
    }

    fn compact(&self, input: &str) -> Result<String, ValidationError> {
        rut_clean(input)
    }

    fn format(&self, input: &str) -> String {
        match rut_clean(input) {
            Ok(value) => split_at(&value, &[2, -4, -1]).join("-"),
            Err(_) => input.to_string(),
        }
    }

    fn validate(&self, input: &str) -> Validation {
        let value = match rut_clean(input) {
            Ok(value) => value,
            Err(error) => return error.into(),
        };
        if value.len() != 12 {
            return ValidationError::InvalidLength.into();
        }
        if !is_digits(&value) {
            return ValidationError::InvalidFormat.into();
        }
        let office: u32 = value[..2].parse().unwrap_or(0);
        if office == 0 || office > 21 {
            return ValidationError::InvalidComponent.into();
        }
        if &value[2..8] == "000000" {
            return ValidationError::InvalidComponent.into();
        }
        if &value[8..11] != "001" {
            return ValidationError::InvalidComponent.into();
        }

        let sum = Weighted::new(RUT_WEIGHTS, 11).checksum(&value[..11]);
        let digit = (-sum).rem_euclid(11);
        if value[11..] != digit.to_string() {
            return ValidationError::InvalidChecksum.into();
        }
        Validation::company(value)
    }
}
