// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Turn raw timestamps into [`ZonedTimestamp`]s that keep their offset.

use std::fmt::{self, Debug, Display};

use log::{trace, warn};

use crate::config::ExecutionMode;
use crate::offset::extract_offset;
use crate::zoned::ZonedTimestamp;

/// A timestamp as handed over by a caller.
///
/// Callers that are not strongly typed may pass something other than a
/// string; such values end up in [`RawTimestamp::Other`].
pub enum RawTimestamp<'a> {
    /// No value at all.
    Absent,
    Text(&'a str),
    /// A value that is not a string, parsed through its `Display` form.
    Other(Box<dyn Display + 'a>),
}

impl Debug for RawTimestamp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawTimestamp::Absent => f.write_str("Absent"),
            RawTimestamp::Text(s) => f.debug_tuple("Text").field(s).finish(),
            RawTimestamp::Other(v) => f.debug_tuple("Other").field(&v.to_string()).finish(),
        }
    }
}

impl<'a> From<&'a str> for RawTimestamp<'a> {
    fn from(s: &'a str) -> Self {
        RawTimestamp::Text(s)
    }
}

impl<'a> From<&'a String> for RawTimestamp<'a> {
    fn from(s: &'a String) -> Self {
        RawTimestamp::Text(s)
    }
}

impl<'a> From<Option<&'a str>> for RawTimestamp<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(RawTimestamp::Absent, RawTimestamp::Text)
    }
}

macro_rules! raw_timestamp_from_value {
    ($($t:ty),+) => {$(
        impl From<$t> for RawTimestamp<'_> {
            fn from(value: $t) -> Self {
                RawTimestamp::Other(Box::new(value))
            }
        }
    )+};
}

raw_timestamp_from_value! { i32, i64, u32, u64, f64, bool, char }

/// Parses timestamps, keeping the wall-clock fields and offset as written.
///
/// The parser holds no state besides its [`ExecutionMode`], so one value can
/// be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneParser {
    mode: ExecutionMode,
}

impl ZoneParser {
    pub fn new(mode: ExecutionMode) -> Self {
        Self { mode }
    }

    /// A parser in the mode given by the `PARSE_ZONE_MODE` environment
    /// variable.
    pub fn from_env() -> Self {
        Self::new(ExecutionMode::from_env())
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Parse a timestamp, keeping the offset it was written with.
    ///
    /// An empty or absent input is the current moment. Anything else is
    /// built from the input and its [offset literal](crate::extract_offset);
    /// malformed input gives an invalid value rather than an error.
    ///
    /// ```
    /// use parse_zone::{ExecutionMode, ZoneParser};
    ///
    /// let parser = ZoneParser::new(ExecutionMode::Strict);
    /// let zoned = parser.parse_zone("2020-10-14T14:03:00+0200");
    /// assert_eq!(zoned.hour(), Some(14));
    /// assert_eq!(zoned.to_string(), "2020-10-14T14:03:00+02:00");
    /// ```
    pub fn parse_zone<'a>(&self, input: impl Into<RawTimestamp<'a>>) -> ZonedTimestamp {
        match input.into() {
            RawTimestamp::Absent => ZonedTimestamp::now(),
            RawTimestamp::Text(s) => parse_text(s),
            RawTimestamp::Other(value) => {
                let text = value.to_string();
                if self.mode.is_strict() {
                    warn!("parse_zone expects a string, coercing {text:?} to a string");
                } else {
                    warn!("parse_zone expects a string, parsing {text:?} best-effort");
                }
                parse_text(&text)
            }
        }
    }
}

fn parse_text(s: &str) -> ZonedTimestamp {
    if s.is_empty() {
        return ZonedTimestamp::now();
    }

    let offset = extract_offset(s);
    trace!("parsing {s:?} with offset literal {offset}");
    ZonedTimestamp::new(s, &offset)
}
