//! Austrian identifier numbers.

use crate::core::checksum::luhn_checksum;
use crate::core::{Validation, ValidationError, Validator, clean_prefix, is_digits, split_at};

/// UID (Umsatzsteuer-Identifikationsnummer, the Austrian VAT number).
///
/// The letter `U` followed by eight digits, optionally preceded by `AT`.
/// The last digit is a Luhn-derived check digit.
pub struct Uid;

fn uid_clean(input: &str) -> Result<String, ValidationError> {
    clean_prefix(input, " -./", &["AT"])
}

impl Validator for Uid {
    fn name(&self) -> &'static str {
        "Austrian VAT Number"
    }

    fn local_name(&self) -> &'static str {
        "Umsatzsteuer-Identifikationsnummer"
    }

    fn abbreviation(&self) -> Option<&'static str> {
        Some("UID")
    }

    fn compact(&self, input: &str) -> Result<String, ValidationError> {
        uid_clean(input)
    }

    fn format(&self, input: &str) -> String {
        uid_clean(input).unwrap_or_else(|_| input.to_string())
    }

    fn validate(&self, input: &str) -> Validation {
        let value = match uid_clean(input) {
            Ok(value) => value,
            Err(error) => return error.into(),
        };
        if value.len() != 9 {
            return ValidationError::InvalidLength.into();
        }
        if !value.starts_with('U') || !is_digits(&value[1..]) {
            return ValidationError::InvalidComponent.into();
        }

        let parts = split_at(&value, &[1, 8]);
        let digit = (16 - luhn_checksum(parts[1])) % 10;
        if parts[2] != digit.to_string() {
            return ValidationError::InvalidChecksum.into();
        }
        Validation::company(value)
    }
}
