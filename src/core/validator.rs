use super::error::{Validation, ValidationError};

/// The uniform contract every identifier kind implements.
///
/// Implementations follow the same control flow, short-circuiting on the
/// first failure: clean the input, check the permitted lengths, check
/// character classes per sub-field, check semantic components (embedded
/// dates, code ranges), verify the check digit, then classify.
///
/// The three operations differ only in how they report trouble:
/// [`validate`](Validator::validate) returns every failure as a value and
/// never panics, [`compact`](Validator::compact) fails atomically through
/// its `Result` (there is no partial compact form), and
/// [`format`](Validator::format) is best-effort and silently returns its
/// input unchanged when cleaning fails — it must never be used as a
/// validity check.
pub trait Validator: Sync {
    /// English name of the identifier kind.
    fn name(&self) -> &'static str;

    /// Name of the identifier kind in its home jurisdiction.
    fn local_name(&self) -> &'static str;

    /// Customary short form, if one exists. Informational only.
    fn abbreviation(&self) -> Option<&'static str> {
        None
    }

    /// The canonical separator-free representation of `input`.
    ///
    /// Runs only the cleaning step; structural and checksum errors are the
    /// business of [`validate`](Validator::validate).
    fn compact(&self, input: &str) -> Result<String, ValidationError>;

    /// The standard presentation form of `input`, best effort.
    fn format(&self, input: &str) -> String;

    /// Run the full check pipeline over `input`.
    fn validate(&self, input: &str) -> Validation;
}
