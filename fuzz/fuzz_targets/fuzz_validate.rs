#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — invalid outcomes are fine, panics are bugs.
        for (_, validator) in kennung::registry::all() {
            let outcome = validator.validate(s);
            // A valid outcome always carries a compact form.
            assert_eq!(outcome.is_valid(), outcome.compact().is_some());
        }
    }
});
