#![no_main]

use faktur::core::Invoice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Stored history files are untrusted input.
    if let Ok(invoices) = serde_json::from_slice::<Vec<Invoice>>(data) {
        for inv in &invoices {
            let _ = faktur::spj::generate_letter_numbers(inv, "B07");
        }
    }
});
