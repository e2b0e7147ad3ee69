//! Dutch identifier numbers.

use crate::core::checksum::{Weighted, iso7064_mod_97_10_validate};
use crate::core::{Validation, ValidationError, Validator, clean, clean_prefix, is_digits, split_at};

/// Weights shared by the BSN check and the legacy BTW front check. The
/// trailing −1 subtracts the check digit from the running sum.
static BSN_WEIGHTS: &[i64] = &[9, 8, 7, 6, 5, 4, 3, 2, -1];

/// BSN (Burgerservicenummer, the Dutch citizen identification number).
///
/// Nine digits with a weighted mod-11 checksum over all digits, the check
/// digit weighted −1.
pub struct Bsn;

fn bsn_clean(input: &str) -> Result<String, ValidationError> {
    clean(input, " -.")
}

impl Validator for Bsn {
    fn name(&self) -> &'static str {
        "Dutch Citizen Identification Number"
    }

    fn local_name(&self) -> &'static str {
        "Burgerservicenummer"
    }

    fn abbreviation(&self) -> Option<&'static str> {
        Some("BSN")
    }

    fn compact(&self, input: &str) -> Result<String, ValidationError> {
        bsn_clean(input)
    }

    fn format(&self, input: &str) -> String {
        match bsn_clean(input) {
            Ok(value) => split_at(&value, &[4, 6]).join("."),
            Err(_) => input.to_string(),
        }
    }

    fn validate(&self, input: &str) -> Validation {
        let value = match bsn_clean(input) {
            Ok(value) => value,
            Err(error) => return error.into(),
        };
        if value.len() != 9 {
            return ValidationError::InvalidLength.into();
        }
        if !is_digits(&value) {
            return ValidationError::InvalidFormat.into();
        }
        if Weighted::new(BSN_WEIGHTS, 11).checksum(&value) != 0 {
            return ValidationError::InvalidChecksum.into();
        }
        Validation::individual(value)
    }
}

/// Btw-identificatienummer (the Dutch VAT number).
///
/// A nine-digit front (zero-padded when shorter), the literal letter `B`
/// and a two-digit company suffix. Older numbers embed a BSN/RSIN and
/// satisfy the weighted mod-11 check over the front; numbers issued since
/// 2020 satisfy ISO 7064 MOD 97-10 over the full `NL…` string instead.
pub struct Btw;

fn btw_clean(input: &str) -> Result<String, ValidationError> {
    let value = clean_prefix(input, " -.", &["NL"])?;
    let parts = split_at(&value, &[-3]);
    Ok(format!("{:0>9}{}", parts[0], parts[1]))
}

impl Validator for Btw {
    fn name(&self) -> &'static str {
        "Dutch VAT Number"
    }

    fn local_name(&self) -> &'static str {
        "Btw-identificatienummer"
    }

    fn abbreviation(&self) -> Option<&'static str> {
        Some("Btw-nr.")
    }

    fn compact(&self, input: &str) -> Result<String, ValidationError> {
        btw_clean(input)
    }

    fn format(&self, input: &str) -> String {
        btw_clean(input).unwrap_or_else(|_| input.to_string())
    }

    fn validate(&self, input: &str) -> Validation {
        let value = match btw_clean(input) {
            Ok(value) => value,
            Err(error) => return error.into(),
        };
        if value.len() != 12 {
            return ValidationError::InvalidLength.into();
        }
        let parts = split_at(&value, &[9, 10]);
        let (front, letter, suffix) = (parts[0], parts[1], parts[2]);
        if !is_digits(front) || !is_digits(suffix) {
            return ValidationError::InvalidFormat.into();
        }
        if letter != "B" {
            return ValidationError::InvalidFormat.into();
        }

        let bsn_style = Weighted::new(BSN_WEIGHTS, 11).checksum(front) == 0;
        if !bsn_style && !iso7064_mod_97_10_validate(&format!("NL{value}")) {
            return ValidationError::InvalidChecksum.into();
        }
        Validation::company(value)
    }
}
