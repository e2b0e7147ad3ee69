//! The shared normalization-and-checksum toolkit.
//!
//! Every country rule is a thin composition of the pieces in this module:
//! the [cleaner](clean()), the [splitter](split_at), the
//! [checksum library](checksum), the date helpers, and the
//! [`Validator`] contract with its [error taxonomy](ValidationError).

pub mod checksum;
mod clean;
mod date;
mod error;
mod split;
mod validator;

pub use clean::{clean, clean_prefix, is_alpha, is_alphanumeric, is_digits};
pub use date::{is_valid_date, is_valid_date_ddmmyy, is_valid_date_yymmdd};
pub use error::{Validation, ValidationError};
pub use split::split_at;
pub use validator::Validator;
