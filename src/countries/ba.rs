//! Bosnian identifier numbers.

use crate::core::checksum::Weighted;
use crate::core::{Validation, ValidationError, Validator, clean, is_digits, is_valid_date, split_at};

static JMBG_WEIGHTS: &[i64] = &[7, 6, 5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// JMBG (Jedinstveni matični broj građana, the Unique Master Citizen
/// Number used across the former Yugoslavia).
///
/// Thirteen digits: birth date as `DDMMYYY` (three-digit year, values
/// below 800 belong to the 2000s), a two-digit region, a three-digit
/// serial and a weighted mod-11 check digit. The successor states reuse
/// this rule unchanged under their own names.
pub struct Jmbg;

fn jmbg_clean(input: &str) -> Result<String, ValidationError> {
    clean(input, " -")
}

impl Validator for Jmbg {
    fn name(&self) -> &'static str {
        "Bosnian Unique Master Citizen Number"
    }

    fn local_name(&self) -> &'static str {
        "Jedinstveni matični broj građana"
    }

    fn abbreviation(&self) -> Option<&'static str> {
        Some("JMBG")
    }

    fn compact(&self, input: &str) -> Result<String, ValidationError> {
        jmbg_clean(input)
    }

    fn format(&self, input: &str) -> String {
        jmbg_clean(input).unwrap_or_else(|_| input.to_string())
    }

    fn validate(&self, input: &str) -> Validation {
        let value = match jmbg_clean(input) {
            Ok(value) => value,
            Err(error) => return error.into(),
        };
        if value.len() != 13 {
            return ValidationError::InvalidLength.into();
        }
        if !is_digits(&value) {
            return ValidationError::InvalidFormat.into();
        }

        let parts = split_at(&value, &[2, 4, 7]);
        let day: u32 = parts[0].parse().unwrap_or(0);
        let month: u32 = parts[1].parse().unwrap_or(0);
        let yyy: i32 = parts[2].parse().unwrap_or(0);
        let year = if yyy < 800 { 2000 + yyy } else { 1000 + yyy };
        if !is_valid_date(year, month, day) {
            return ValidationError::InvalidComponent.into();
        }

        let front = &value[..12];
        let sum = Weighted::new(JMBG_WEIGHTS, 11).checksum(front);
        let digit = ((11 - sum) % 11) % 10;
        if value[12..] != digit.to_string() {
            return ValidationError::InvalidChecksum.into();
        }
        Validation::individual(value)
    }
}
