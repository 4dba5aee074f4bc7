#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Unparseable input is fine; panics are bugs.
        let _ = faktur::core::parse_activity_date(s);
    }
});
