#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for (_, validator) in kennung::registry::all() {
            // compact may fail, but only through its Result.
            let _ = validator.compact(s);
            // format never fails; on cleaning trouble it echoes the input.
            let _ = validator.format(s);
        }
    }
});
