//! Australian identifier numbers.

use crate::core::checksum::Weighted;
use crate::core::{Validation, ValidationError, Validator, clean, is_digits, split_at};

static TFN_WEIGHTS: &[i64] = &[1, 4, 3, 7, 5, 8, 6, 9, 10];

/// TFN (Australian Tax File Number).
///
/// Eight (older numbers) or nine digits with a weighted mod-11 checksum
/// and no further structure. Issued to individuals and organisations
/// alike, so a valid TFN classifies as both.
pub struct Tfn;

fn tfn_clean(input: &str) -> Result<String, ValidationError> {
    clean(input, " ")
}

impl Validator for Tfn {
    fn name(&self) -> &'static str {
        "Australian Tax File Number"
    }

    fn local_name(&self) -> &'static str {
        "Tax File Number"
    }

    fn abbreviation(&self) -> Option<&'static str> {
        Some("TFN")
    }

    fn compact(&self, input: &str) -> Result<String, ValidationError> {
        tfn_clean(input)
    }

    fn format(&self, input: &str) -> String {
        match tfn_clean(input) {
            Ok(value) => split_at(&value, &[3, 6]).join(" "),
            Err(_) => input.to_string(),
        }
    }

    fn validate(&self, input: &str) -> Validation {
        let value = match tfn_clean(input) {
            Ok(value) => value,
            Err(error) => return error.into(),
        };
        if value.len() != 8 && value.len() != 9 {
            return ValidationError::InvalidLength.into();
        }
        if !is_digits(&value) {
            return ValidationError::InvalidFormat.into();
        }
        if Weighted::new(TFN_WEIGHTS, 11).checksum(&value) != 0 {
            return ValidationError::InvalidChecksum.into();
        }
        Validation::individual_or_company(value)
    }
}
