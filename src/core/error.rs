use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an identifier number fails validation.
///
/// The four kinds form a stable, flat taxonomy that callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// The cleaned value's length matches none of the permitted lengths.
    #[error("the number has an invalid length")]
    InvalidLength,

    /// Characters or structure do not match the required pattern. Also
    /// raised when cleaning itself fails due to illegal characters.
    #[error("the number has an invalid format")]
    InvalidFormat,

    /// A sub-field refers to an unknown or out-of-range component, such as
    /// an embedded date, an office code, or a registration-type letter.
    #[error("one of the parts of the number is invalid or unknown")]
    InvalidComponent,

    /// All structural checks pass but the check digit does not match.
    #[error("the number's checksum or check digit is invalid")]
    InvalidChecksum,
}

/// Outcome of [`Validator::validate`](crate::core::Validator::validate).
///
/// `validate` always returns exactly one variant; it never panics. No
/// partial compact value is exposed on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Validation {
    /// All checks passed.
    Valid {
        /// Canonical separator-free representation.
        compact: String,
        /// The number identifies a natural person.
        ///
        /// Both flags may be set (schemes issued to persons and entities
        /// alike) or both clear (unclassifiable schemes).
        is_individual: bool,
        /// The number identifies a company or other legal entity.
        is_company: bool,
    },
    /// At least one check failed.
    Invalid {
        /// The first check that failed.
        error: ValidationError,
    },
}

impl Validation {
    /// A valid number identifying a natural person.
    pub fn individual(compact: impl Into<String>) -> Self {
        Validation::Valid {
            compact: compact.into(),
            is_individual: true,
            is_company: false,
        }
    }

    /// A valid number identifying a legal entity.
    pub fn company(compact: impl Into<String>) -> Self {
        Validation::Valid {
            compact: compact.into(),
            is_individual: false,
            is_company: true,
        }
    }

    /// A valid number issued to persons and entities alike.
    pub fn individual_or_company(compact: impl Into<String>) -> Self {
        Validation::Valid {
            compact: compact.into(),
            is_individual: true,
            is_company: true,
        }
    }

    /// Whether all checks passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid { .. })
    }

    /// The canonical compact value, if valid.
    pub fn compact(&self) -> Option<&str> {
        match self {
            Validation::Valid { compact, .. } => Some(compact),
            Validation::Invalid { .. } => None,
        }
    }

    /// The failure reason, if invalid.
    pub fn error(&self) -> Option<ValidationError> {
        match self {
            Validation::Valid { .. } => None,
            Validation::Invalid { error } => Some(*error),
        }
    }
}

impl From<ValidationError> for Validation {
    fn from(error: ValidationError) -> Self {
        Validation::Invalid { error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let ok = Validation::individual("123456789");
        assert!(ok.is_valid());
        assert_eq!(ok.compact(), Some("123456789"));
        assert_eq!(ok.error(), None);

        let bad: Validation = ValidationError::InvalidLength.into();
        assert!(!bad.is_valid());
        assert_eq!(bad.compact(), None);
        assert_eq!(bad.error(), Some(ValidationError::InvalidLength));
    }

    #[test]
    fn classification_flags() {
        assert_eq!(
            Validation::individual("1"),
            Validation::Valid {
                compact: "1".into(),
                is_individual: true,
                is_company: false
            }
        );
        assert_eq!(
            Validation::company("2"),
            Validation::Valid {
                compact: "2".into(),
                is_individual: false,
                is_company: true
            }
        );
        assert_eq!(
            Validation::individual_or_company("3"),
            Validation::Valid {
                compact: "3".into(),
                is_individual: true,
                is_company: true
            }
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ValidationError::InvalidLength.to_string(),
            "the number has an invalid length"
        );
        assert_eq!(
            ValidationError::InvalidChecksum.to_string(),
            "the number's checksum or check digit is invalid"
        );
    }
}
