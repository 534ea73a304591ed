// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore shhmm colonless

//! Parse the time of day of an ISO 8601 literal and numeric UTC offsets.
//!
//! The time of day is `HH:MM[:SS[(.|,)fraction]]` on a 24 hour clock. A
//! numeric offset is written `shh`, `shhmm` or `shh:mm` where `s` is `+` or
//! `-`.

use std::fmt::Display;

use chrono::FixedOffset;
use winnow::{
    combinator::{alt, opt, preceded},
    error::{ErrMode, StrContext},
    seq,
    token::{one_of, take_while},
    ModalResult, Parser,
};

use super::primitive::{ctx_err, fixed_number, nano_seconds, sign};

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub(crate) struct Time {
    pub(crate) hour: u32,
    pub(crate) minute: u32,
    pub(crate) second: u32,
    pub(crate) nanosecond: u32,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub(crate) struct Offset {
    pub(crate) negative: bool,
    pub(crate) hours: u32,
    pub(crate) minutes: u32,
}

impl Offset {
    pub(crate) fn seconds(&self) -> i32 {
        let secs = (self.hours * 3600 + self.minutes * 60) as i32;
        if self.negative {
            -secs
        } else {
            secs
        }
    }
}

impl TryFrom<Offset> for FixedOffset {
    type Error = &'static str;

    fn try_from(offset: Offset) -> Result<Self, Self::Error> {
        FixedOffset::east_opt(offset.seconds()).ok_or("offset out of range")
    }
}

impl Display for Offset {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            fmt,
            "{}{:02}:{:02}",
            if self.negative { "-" } else { "+" },
            self.hours,
            self.minutes
        )
    }
}

/// Parse an ISO 8601 time of day
pub(super) fn iso(input: &mut &str) -> ModalResult<Time> {
    (
        hour,
        preceded(':', minute),
        opt(preceded(':', (second, opt(nano_seconds)))),
    )
        .map(|(hour, minute, seconds)| {
            let (second, nanosecond) = seconds
                .map(|(second, nanos)| (second, nanos.unwrap_or(0)))
                .unwrap_or((0, 0));
            Time {
                hour,
                minute,
                second,
                nanosecond,
            }
        })
        .parse_next(input)
}

/// Parse a number of hours in `0..24`
fn hour(input: &mut &str) -> ModalResult<u32> {
    fixed_number(2)
        .verify(|x: &u32| *x < 24)
        .context(StrContext::Label("hour"))
        .parse_next(input)
}

/// Parse a number of minutes in `0..60`
fn minute(input: &mut &str) -> ModalResult<u32> {
    fixed_number(2)
        .verify(|x: &u32| *x < 60)
        .context(StrContext::Label("minute"))
        .parse_next(input)
}

/// Parse a number of seconds in `0..60`
fn second(input: &mut &str) -> ModalResult<u32> {
    fixed_number(2)
        .verify(|x: &u32| *x < 60)
        .context(StrContext::Label("second"))
        .parse_next(input)
}

/// Parse a numeric offset, `shh`, `shhmm` or `shh:mm`
///
/// Once the sign and two digits are read, an out of range value is a hard
/// error rather than a backtrack.
pub(super) fn offset(input: &mut &str) -> ModalResult<Offset> {
    seq!(Offset {
        negative: sign,
        hours: fixed_number(2),
        minutes: opt(preceded(opt(':'), fixed_number(2))).map(|m| m.unwrap_or(0)),
    })
    .parse_next(input)
    .and_then(|offset| {
        if offset.hours > 23 {
            return Err(ErrMode::Cut(ctx_err("offset hour between 0 and 23")));
        }
        if offset.minutes > 59 {
            return Err(ErrMode::Cut(ctx_err("offset minute between 0 and 59")));
        }
        Ok(offset)
    })
}

/// Skip the zone designator trailing a literal: `Z` or anything that looks
/// like a numeric offset.
///
/// The designator is not interpreted here. The offset of a zoned value comes
/// from its offset literal, which is validated on its own.
pub(super) fn designator(input: &mut &str) -> ModalResult<()> {
    alt((
        'Z'.void(),
        (
            one_of(['+', '-']),
            take_while(0.., |c: char| c.is_ascii_digit() || c == ':'),
        )
            .void(),
    ))
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use winnow::Parser;

    use super::{designator, iso, offset, Offset, Time};

    #[test]
    fn simple() {
        let reference = Time {
            hour: 14,
            minute: 3,
            second: 0,
            nanosecond: 0,
        };

        for mut s in ["14:03:00", "14:03", "14:03:00Z", "14:03:00+0200"] {
            assert_eq!(iso(&mut s).unwrap(), reference);
        }
    }

    #[test]
    fn fractional_seconds() {
        let reference = Time {
            hour: 7,
            minute: 19,
            second: 5,
            nanosecond: 250_000_000,
        };

        for mut s in ["07:19:05.25", "07:19:05,25", "07:19:05.250000000"] {
            assert_eq!(iso(&mut s).unwrap(), reference);
        }
    }

    #[test]
    fn midnight_and_last_second() {
        assert_eq!(iso.parse_peek("00:00:00").unwrap().1, Time::default());
        assert_eq!(
            iso.parse_peek("23:59:59").unwrap().1,
            Time {
                hour: 23,
                minute: 59,
                second: 59,
                nanosecond: 0,
            }
        );
    }

    #[test]
    fn out_of_range() {
        for s in ["24:00", "12:60", "12:30:60", "1:30", "12", "12:3"] {
            assert!(iso.parse(s).is_err(), "{s}");
        }
    }

    #[test]
    fn offsets() {
        for (s, negative, hours, minutes) in [
            ("+0200", false, 2, 0),
            ("+02:00", false, 2, 0),
            ("+02", false, 2, 0),
            ("-0530", true, 5, 30),
            ("-05:30", true, 5, 30),
            ("+00:00", false, 0, 0),
        ] {
            let expected = Offset {
                negative,
                hours,
                minutes,
            };
            assert_eq!(offset.parse(s).unwrap(), expected, "{s}");
        }
    }

    #[test]
    fn offset_out_of_range() {
        for s in ["+2400", "+25:00", "-0260", "+2", "0200", "+02:", "+020"] {
            assert!(offset.parse(s).is_err(), "{s}");
        }
    }

    #[test]
    fn offset_to_fixed() {
        let parsed = offset.parse("-05:30").unwrap();
        assert_eq!(parsed.to_string(), "-05:30");
        assert_eq!(
            FixedOffset::try_from(parsed).unwrap(),
            FixedOffset::west_opt(5 * 3600 + 1800).unwrap()
        );
    }

    #[test]
    fn designators() {
        for s in ["Z", "+0200", "-02:00", "+", "-1"] {
            assert!(designator.parse(s).is_ok(), "{s}");
        }
        for s in ["", "z", "UTC", "+02 00"] {
            assert!(designator.parse(s).is_err(), "{s}");
        }
    }
}
