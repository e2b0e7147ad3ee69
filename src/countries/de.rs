//! German identifier numbers.

use crate::core::checksum::iso7064_mod_11_10_validate;
use crate::core::{Validation, ValidationError, Validator, clean, clean_prefix, is_digits, split_at};

/// USt-IdNr. (Umsatzsteuer-Identifikationsnummer, the German VAT number).
///
/// Nine digits, optionally prefixed with `DE`, checked with ISO 7064
/// MOD 11-10.
pub struct Vat;

fn vat_clean(input: &str) -> Result<String, ValidationError> {
    clean_prefix(input, " -./,", &["DE"])
}

impl Validator for Vat {
    fn name(&self) -> &'static str {
        "German VAT Number"
    }

    fn local_name(&self) -> &'static str {
        "Umsatzsteuer-Identifikationsnummer"
    }

    fn abbreviation(&self) -> Option<&'static str> {
        Some("USt-IdNr.")
    }

    fn compact(&self, input: &str) -> Result<String, ValidationError> {
        vat_clean(input)
    }

    fn format(&self, input: &str) -> String {
        vat_clean(input).unwrap_or_else(|_| input.to_string())
    }

    fn validate(&self, input: &str) -> Validation {
        let value = match vat_clean(input) {
            Ok(value) => value,
            Err(error) => return error.into(),
        };
        if value.len() != 9 {
            return ValidationError::InvalidLength.into();
        }
        if !is_digits(&value) {
            return ValidationError::InvalidFormat.into();
        }
        if !iso7064_mod_11_10_validate(&value) {
            return ValidationError::InvalidChecksum.into();
        }
        Validation::company(value)
    }
}

/// IdNr (Steuerliche Identifikationsnummer, the German personal tax
/// number).
///
/// Eleven digits with an ISO 7064 MOD 11-10 check digit. The number
/// carries no personal information, but in the first ten digits exactly
/// one digit occurs two or three times while the others occur at most
/// once.
pub struct IdNr;

fn idnr_clean(input: &str) -> Result<String, ValidationError> {
    clean(input, " -./,")
}

impl Validator for IdNr {
    fn name(&self) -> &'static str {
        "German Personal Tax Number"
    }

    fn local_name(&self) -> &'static str {
        "Steuerliche Identifikationsnummer"
    }

    fn abbreviation(&self) -> Option<&'static str> {
        Some("IdNr")
    }

    fn compact(&self, input: &str) -> Result<String, ValidationError> {
        idnr_clean(input)
    }

    fn format(&self, input: &str) -> String {
        match idnr_clean(input) {
            Ok(value) => split_at(&value, &[2, 5, 8]).join(" "),
            Err(_) => input.to_string(),
        }
    }

    fn validate(&self, input: &str) -> Validation {
        let value = match idnr_clean(input) {
            Ok(value) => value,
            Err(error) => return error.into(),
        };
        if value.len() != 11 {
            return ValidationError::InvalidLength.into();
        }
        if !is_digits(&value) {
            return ValidationError::InvalidFormat.into();
        }
        if value.starts_with('0') {
            return ValidationError::InvalidComponent.into();
        }

        let mut counts = [0u8; 10];
        for b in value[..10].bytes() {
            counts[(b - b'0') as usize] += 1;
        }
        let repeated: Vec<u8> = counts.iter().copied().filter(|&n| n > 1).collect();
        if repeated.len() != 1 || !(2..=3).contains(&repeated[0]) {
            return ValidationError::InvalidComponent.into();
        }

        if !iso7064_mod_11_10_validate(&value) {
            return ValidationError::InvalidChecksum.into();
        }
        Validation::individual(value)
    }
}
