// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The zoned timestamp value.
//!
//! A [`ZonedTimestamp`] is a point in time together with the UTC offset it is
//! displayed in. Its wall-clock fields are the ones that were written in the
//! literal it was built from, not the ones of the local or UTC time zone.

use std::fmt::{self, Display, Write};
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, Local, TimeDelta, TimeZone, Timelike, Utc};

use crate::offset::OffsetLiteral;
use crate::{items, ParseZoneError};

/// Why a [`ZonedTimestamp`] is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// The literal is not an ISO 8601 date with an optional time of day.
    Malformed,
    /// The date does not exist, e.g. `2021-02-30`.
    DateOutOfRange,
    /// The time of day does not exist.
    TimeOutOfRange,
    /// The offset literal is not a valid numeric offset.
    BadOffset,
}

impl Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Malformed => write!(f, "malformed timestamp literal"),
            InvalidReason::DateOutOfRange => write!(f, "date out of range"),
            InvalidReason::TimeOutOfRange => write!(f, "time of day out of range"),
            InvalidReason::BadOffset => write!(f, "invalid UTC offset"),
        }
    }
}

/// A date and time that remembers the UTC offset it was written with.
///
/// Malformed input does not fail construction. It yields an invalid value,
/// whose field accessors return `None` and which displays as
/// `"Invalid date"`.
#[derive(Debug, Clone, Copy)]
pub struct ZonedTimestamp {
    value: Result<DateTime<FixedOffset>, InvalidReason>,
    explicit_offset: bool,
}

impl ZonedTimestamp {
    /// The current moment, in the local offset. No offset was given
    /// explicitly.
    pub fn now() -> Self {
        Self {
            value: Ok(Local::now().fixed_offset()),
            explicit_offset: false,
        }
    }

    /// Build a value from a raw literal and the offset literal it should be
    /// tagged with.
    ///
    /// The wall-clock fields are taken from `raw` verbatim. A zone designator
    /// at the end of `raw` is skipped; the offset always comes from `offset`.
    ///
    /// ```
    /// use parse_zone::{OffsetLiteral, ZonedTimestamp};
    ///
    /// let zoned = ZonedTimestamp::new("2020-10-14T14:03:00", &OffsetLiteral::Explicit("+0200"));
    /// assert_eq!(zoned.hour(), Some(14));
    /// assert_eq!(zoned.utc_offset_minutes(), Some(120));
    /// ```
    pub fn new(raw: &str, offset: &OffsetLiteral<'_>) -> Self {
        let value = items::wall_clock(raw).and_then(|local| {
            let offset = offset.to_fixed_offset().ok_or(InvalidReason::BadOffset)?;
            offset
                .from_local_datetime(&local)
                .single()
                .ok_or(InvalidReason::DateOutOfRange)
        });

        Self {
            value,
            explicit_offset: true,
        }
    }

    /// The same instant, with wall-clock fields recomputed in `tz`.
    ///
    /// ```
    /// use chrono::Utc;
    /// use parse_zone::parse_zone;
    ///
    /// let zoned = parse_zone("2020-10-14T14:03:00+0200").with_time_zone(&Utc);
    /// assert_eq!(zoned.hour(), Some(12));
    /// ```
    pub fn with_time_zone<Tz: TimeZone>(&self, tz: &Tz) -> Self {
        Self {
            value: self.value.map(|dt| dt.with_timezone(tz).fixed_offset()),
            explicit_offset: true,
        }
    }

    /// Shorthand for `with_time_zone(&Utc)`.
    pub fn to_utc(&self) -> Self {
        self.with_time_zone(&Utc)
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_ok()
    }

    pub fn invalid_reason(&self) -> Option<InvalidReason> {
        self.value.err()
    }

    /// Whether the offset was supplied at construction, as opposed to the
    /// local offset picked by [`ZonedTimestamp::now`].
    pub fn has_explicit_offset(&self) -> bool {
        self.explicit_offset
    }

    pub fn datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.value.ok()
    }

    pub fn into_result(self) -> Result<DateTime<FixedOffset>, ParseZoneError> {
        self.value.map_err(ParseZoneError::InvalidTimestamp)
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.value.ok().map(|dt| *dt.offset())
    }

    /// The offset from UTC in minutes, east positive.
    pub fn utc_offset_minutes(&self) -> Option<i32> {
        self.offset().map(|offset| offset.local_minus_utc() / 60)
    }

    pub fn year(&self) -> Option<i32> {
        self.value.ok().map(|dt| dt.year())
    }

    pub fn month(&self) -> Option<u32> {
        self.value.ok().map(|dt| dt.month())
    }

    pub fn day(&self) -> Option<u32> {
        self.value.ok().map(|dt| dt.day())
    }

    pub fn hour(&self) -> Option<u32> {
        self.value.ok().map(|dt| dt.hour())
    }

    pub fn minute(&self) -> Option<u32> {
        self.value.ok().map(|dt| dt.minute())
    }

    pub fn second(&self) -> Option<u32> {
        self.value.ok().map(|dt| dt.second())
    }

    pub fn nanosecond(&self) -> Option<u32> {
        self.value.ok().map(|dt| dt.nanosecond())
    }

    /// Seconds since the Unix epoch.
    pub fn timestamp(&self) -> Option<i64> {
        self.value.ok().map(|dt| dt.timestamp())
    }

    /// The time elapsed from `other` to `self`. `None` if either value is
    /// invalid.
    pub fn signed_duration_since(&self, other: &ZonedTimestamp) -> Option<TimeDelta> {
        match (self.value, other.value) {
            (Ok(a), Ok(b)) => Some(a.signed_duration_since(b)),
            _ => None,
        }
    }

    /// Format the wall-clock fields with a chrono format string. `None` if the
    /// value is invalid or the format string is not understood.
    pub fn format(&self, fmt: &str) -> Option<String> {
        let dt = self.value.ok()?;
        let mut out = String::new();
        write!(out, "{}", dt.format(fmt)).ok()?;
        Some(out)
    }
}

/// Two values are equal when they denote the same instant in the same offset.
impl PartialEq for ZonedTimestamp {
    fn eq(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (Ok(a), Ok(b)) => a == b && a.offset() == b.offset(),
            (Err(a), Err(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ZonedTimestamp {}

impl Display for ZonedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Ok(dt) => write!(f, "{}", dt.to_rfc3339()),
            Err(_) => write!(f, "Invalid date"),
        }
    }
}

impl FromStr for ZonedTimestamp {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let zoned = crate::parse_zone(s);
        zoned.value.map_err(ParseZoneError::InvalidTimestamp)?;
        Ok(zoned)
    }
}

impl TryFrom<ZonedTimestamp> for DateTime<FixedOffset> {
    type Error = ParseZoneError;

    fn try_from(zoned: ZonedTimestamp) -> Result<Self, Self::Error> {
        zoned.into_result()
    }
}

impl From<DateTime<FixedOffset>> for ZonedTimestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self {
            value: Ok(dt),
            explicit_offset: true,
        }
    }
}
