#![no_main]

use libfuzzer_sys::fuzz_target;
use parse_zone::{extract_offset, OffsetLiteral};

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");
    match extract_offset(s) {
        OffsetLiteral::Utc => {}
        OffsetLiteral::Explicit(offset) => {
            assert!(s.ends_with(offset));
            assert!(offset.starts_with('+') || offset.starts_with('-'));
        }
    }
});
