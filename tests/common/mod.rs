// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use parse_zone::{parse_zone, ZonedTimestamp};

const FMT: &str = "%Y-%m-%d %H:%M:%S%:z";

fn format_for_assert(zoned: &ZonedTimestamp) -> String {
    zoned.format(FMT).unwrap_or_else(|| zoned.to_string())
}

/// Check the wall-clock fields and offset `input` parses to.
pub fn check_zoned(input: &str, expected: &str) {
    let zoned = parse_zone(input);
    assert!(
        zoned.is_valid(),
        "Failed to parse date from value '{input}': {:?}",
        zoned.invalid_reason()
    );

    assert_eq!(format_for_assert(&zoned), expected, "Input value: {input}");
}

/// Check the UTC wall-clock fields `input` parses to.
pub fn check_utc(input: &str, expected: &str) {
    let zoned = parse_zone(input).to_utc();
    assert_eq!(format_for_assert(&zoned), expected, "Input value: {input}");
}
