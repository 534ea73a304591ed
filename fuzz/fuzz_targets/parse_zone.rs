#![no_main]

use chrono::Utc;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");
    let zoned = parse_zone::parse_zone(s);

    // Re-expressing a value never changes the instant it denotes.
    if let Some(ts) = zoned.timestamp() {
        assert_eq!(zoned.to_utc().timestamp(), Some(ts));
        assert_eq!(zoned.with_time_zone(&Utc).utc_offset_minutes(), Some(0));
    }
    let _ = zoned.to_string();
});
