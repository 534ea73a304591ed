// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore chrono

//! Grammar of the literals handled by the crate.
//!
//! A timestamp literal is a calendar date, optionally followed by a time of
//! day, optionally followed by a zone designator:
//!
//! ```ebnf
//! literal    = date , [ ( "T" | " " ) , time , [ designator ] ] ;
//! date       = digit4 , "-" , digit2 , "-" , digit2 ;
//! time       = digit2 , ":" , digit2 , [ ":" , digit2 , [ ( "." | "," ) , { digit } ] ] ;
//! designator = "Z" | ( "+" | "-" ) , { digit | ":" } ;
//! offset     = ( "+" | "-" ) , digit2 , [ [ ":" ] , digit2 ] ;
//! ```
//!
//! The pieces live in separate modules:
//!  - [`date`]
//!  - [`time`]
//!  - [`primitive`]

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use winnow::{
    combinator::{opt, preceded},
    token::one_of,
    Parser,
};

use crate::zoned::InvalidReason;

mod date;
mod primitive;
mod time;

/// Read the wall-clock fields of a timestamp literal.
///
/// A date without a time of day is midnight. The zone designator is skipped,
/// see [`time::designator`].
pub(crate) fn wall_clock(input: &str) -> Result<NaiveDateTime, InvalidReason> {
    let (date, time) = (
        date::iso,
        opt(preceded(one_of(['T', ' ']), (time::iso, opt(time::designator)))),
    )
        .map(|(date, time)| (date, time.map(|(time, _)| time).unwrap_or_default()))
        .parse(input)
        .map_err(|e| {
            log::trace!("cannot read wall clock of {input:?}: {e}");
            InvalidReason::Malformed
        })?;

    let date = NaiveDate::from_ymd_opt(date.year, date.month, date.day)
        .ok_or(InvalidReason::DateOutOfRange)?;
    let time = NaiveTime::from_hms_nano_opt(time.hour, time.minute, time.second, time.nanosecond)
        .ok_or(InvalidReason::TimeOutOfRange)?;

    Ok(date.and_time(time))
}

/// Interpret a numeric offset literal such as `+0200` or `-05:30`.
pub(crate) fn offset_literal(input: &str) -> Option<FixedOffset> {
    match time::offset.parse(input) {
        Ok(offset) => {
            log::trace!("offset literal {input:?} reads as {offset}");
            offset.try_into().ok()
        }
        Err(e) => {
            log::trace!("invalid offset literal {input:?}: {e}");
            None
        }
    }
}
