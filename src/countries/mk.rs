//! North Macedonian identifier numbers.

use crate::core::{Validation, ValidationError, Validator};

use super::ba;

/// ЕМБГ (the North Macedonian Unique Master Citizen Number).
///
/// Same number as the Yugoslav-era JMBG; validation delegates to
/// [`ba::Jmbg`], only the metadata differs.
pub struct Jmbg;

impl Validator for Jmbg {
    fn name(&self) -> &'static str {
        "Macedonian Unique Master Citizen Number"
    }

    fn local_name(&self) -> &'static str {
        "Единствен матичен број на граѓанинот"
    }

    fn abbreviation(&self) -> Option<&'static str> {
        Some("ЕМБГ")
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
