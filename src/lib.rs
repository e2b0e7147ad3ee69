//! # kennung
//!
//! Validation, normalization and formatting of national identifier
//! numbers: tax IDs, VAT numbers, citizen and business registration
//! numbers.
//!
//! Every identifier kind answers three questions about a raw input
//! string: is it structurally valid, what is its canonical **compact**
//! form, and what is its presentation **format**. The kinds share one
//! toolkit — the cleaner, the splitter, a small library of check-digit
//! algorithms and a four-kind error taxonomy — and each country rule is a
//! thin composition of those pieces.
//!
//! Everything is a pure function over immutable input: no I/O, no
//! network, no shared mutable state, so validations can run concurrently
//! without coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use kennung::{Validation, Validator};
//! use kennung::countries::{de, nl};
//!
//! // Validate against a concrete kind.
//! let outcome = de::Vat.validate("DE 136,695 976");
//! assert_eq!(
//!     outcome,
//!     Validation::Valid {
//!         compact: "136695976".into(),
//!         is_individual: false,
//!         is_company: true,
//!     }
//! );
//!
//! // Or dispatch by kind key.
//! let bsn = kennung::registry::lookup("nl/bsn").unwrap();
//! assert_eq!(bsn.format("111222333"), "1112.22.333");
//! assert_eq!(nl::Bsn.compact("1112.22.333").as_deref(), Ok("111222333"));
//! ```

pub mod core;
pub mod countries;
pub mod registry;

// Re-export the core surface at the crate root for convenience
pub use crate::core::{Validation, ValidationError, Validator};
