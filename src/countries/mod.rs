//! Country rule modules.
//!
//! Each identifier kind is a unit struct implementing
//! [`Validator`](crate::core::Validator): a declarative composition of
//! the core cleaner, splitter and checksum primitives plus the country's
//! own constants (weights, code sets, permitted lengths). Kinds that are
//! the same number under a different name delegate instead of repeating
//! the rule (see [`mk::Jmbg`] and [`rs::Jmbg`]).

pub mod at;
pub mod au;
pub mod ba;
pub mod by;
pub mod de;
pub mod mk;
pub mod nl;
pub mod rs;
pub mod uy;
