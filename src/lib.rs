// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! A Rust crate for parsing ISO 8601 timestamps while keeping the UTC offset
//! they were written with.
//!
//! `2020-10-14T14:03:00+0200` parses to 14:03 at `+02:00`, not to the same
//! instant in the local or UTC time zone. Supported inputs:
//!
//! * dates, e.g. "2020-10-14" (midnight, UTC)
//! * date and time without offset, e.g. "2020-10-14T14:03:00" (UTC)
//! * UTC marker, e.g. "2020-10-14T14:03:00Z"
//! * numeric offsets, e.g. "2020-10-14T14:03:00+0200", "2019-03-02T07:18:00+01:00"
//!
use std::error::Error;
use std::fmt::{self, Display};

mod config;
mod items;
mod offset;
mod parser;
mod zoned;

pub use config::{ExecutionMode, MODE_VAR};
pub use offset::{extract_offset, extract_offset_opt, OffsetLiteral};
pub use parser::{RawTimestamp, ZoneParser};
pub use zoned::{InvalidReason, ZonedTimestamp};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseZoneError {
    InvalidTimestamp(InvalidReason),
    UnknownMode(String),
}

impl Display for ParseZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseZoneError::InvalidTimestamp(reason) => {
                write!(f, "Invalid timestamp: {reason}")
            }
            ParseZoneError::UnknownMode(mode) => {
                write!(f, "Unknown execution mode: {mode:?}")
            }
        }
    }
}

impl Error for ParseZoneError {}

/// Parses a timestamp and returns a `ZonedTimestamp` with the wall-clock time
/// and UTC offset written in the string.
///
/// # Arguments
///
/// * `s` - A string slice representing the timestamp.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// let zoned = parse_zone::parse_zone("2020-10-14T14:03:00+0200");
/// assert_eq!(zoned.hour(), Some(14));
/// assert_eq!(
///     zoned.datetime(),
///     FixedOffset::east_opt(7200).unwrap().with_ymd_and_hms(2020, 10, 14, 14, 3, 0).single()
/// );
/// ```
///
/// # Returns
///
/// * the current moment if `s` is empty
/// * an invalid `ZonedTimestamp` if `s` cannot be read, see
///   [`ZonedTimestamp::invalid_reason`]
pub fn parse_zone(s: &str) -> ZonedTimestamp {
    ZoneParser::default().parse_zone(s)
}
