//! Dispatch table from identifier-kind keys to validators.

use crate::core::Validator;
use crate::countries::{at, au, ba, by, de, mk, nl, rs, uy};

/// All registered validators, keyed `"<country>/<kind>"`.
/// Sorted for binary search.
static VALIDATORS: &[(&str, &dyn Validator)] = &[
    ("at/uid", &at::Uid),
    ("au/tfn", &au::Tfn),
    ("ba/jmbg", &ba::Jmbg),
    ("by/unp", &by::Unp),
    ("de/idnr", &de::IdNr),
    ("de/vat", &de::Vat),
    ("mk/jmbg", &mk::Jmbg),
    ("nl/bsn", &nl::Bsn),
    ("nl/btw", &nl::Btw),
    ("rs/jmbg", &rs::Jmbg),
    ("rs/pib", &rs::Pib),
    ("uy/rut", &uy::Rut),
];

/// Look up a validator by its kind key (e.g. `"de/vat"`).
pub fn lookup(key: &str) -> Option<&'static dyn Validator> {
    VALIDATORS
        .binary_search_by_key(&key, |&(k, _)| k)
        .ok()
        .map(|idx| VALIDATORS[idx].1)
}

/// Iterate over all registered kinds in key order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static dyn Validator)> {
    VALIDATORS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        for window in VALIDATORS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "registry keys not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn lookup_hits() {
        let validator = lookup("de/vat").unwrap();
        assert_eq!(validator.name(), "German VAT Number");
        assert!(lookup("uy/rut").is_some());
    }

    #[test]
    fn lookup_misses() {
        assert!(lookup("xx/none").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("de").is_none());
    }

    #[test]
    fn metadata_is_present() {
        for (key, validator) in all() {
            assert!(!validator.name().is_empty(), "{key} has no name");
            assert!(!validator.local_name().is_empty(), "{key} has no local name");
        }
    }
}
