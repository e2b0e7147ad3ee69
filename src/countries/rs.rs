//! Serbian identifier numbers.

use crate::core::checksum::mod_11_10_validate;
use crate::core::{Validation, ValidationError, Validator, clean_prefix, is_digits};

use super::ba;

/// PIB (Poreski identifikacioni broj, the Serbian tax identification
/// number).
///
/// Nine digits, optionally prefixed with `RS`, checked with the two-stage
/// MOD 11, MOD 10 algorithm.
pub struct Pib;

fn pib_clean(input: &str) -> Result<String, ValidationError> {
    clean_prefix(input, " -.", &["RS"])
}

impl Validator for Pib {
    fn name(&self) -> &'static str {
        "Serbian Tax Identification Number"
    }

    fn local_name(&self) -> &'static str {
        "Poreski identifikacioni broj"
    }

    fn abbreviation(&self) -> Option<&'static str> {
        Some("PIB")
    }

    fn compact(&self, input: &str) -> Result<String, ValidationError> {
        pib_clean(input)
    }

    fn format(&self, input: &str) -> String {
        pib_clean(input).unwrap_or_else(|_| input.to_string())
    }

    fn validate(&self, input: &str) -> Validation {
        let value = match pib_clean(input) {
            Ok(value) => value,
            Err(error) => return error.into(),
        };
        if value.len() != 9 {
            return ValidationError::InvalidLength.into();
        }
        if !is_digits(&value) {
            return ValidationError::InvalidFormat.into();
        }
        if !mod_11_10_validate(&value) {
            return ValidationError::InvalidChecksum.into();
        }
        Validation::company(value)
    }
}

/// ЈМБГ (the Serbian Unique Master Citizen Number), delegating to
/// [`ba::Jmbg`].
pub struct Jmbg;

impl Validator for Jmbg {
    fn name(&self) -> &'static str {
        "Serbian Unique Master Citizen Number"
    }

    fn local_name(&self) -> &'static str {
        "Јединствени матични број грађана"
    }

    fn abbreviation(&self) -> Option<&'static str> {
        Some("ЈМБГ")
    }

    fn compact(&self, input: &str) -> Result<String, ValidationError> {
        ba::Jmbg.compact(input)
    }

    fn format(&self, input: &str) -> String {
        ba::Jmbg.format(input)
    }

    fn validate(&self, input: &str) -> Validation {
        ba::Jmbg.validate(input)
    }
}
