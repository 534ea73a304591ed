// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse the calendar date of an ISO 8601 literal, `YYYY-MM-DD`.
//!
//! Only the extended form with hyphens is accepted. Whether the day exists in
//! the given month is left to chrono when the fields are assembled.

use winnow::{error::StrContext, seq, ModalResult, Parser};

use super::primitive::fixed_number;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub(crate) struct Date {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

/// Parse `YYYY-MM-DD`
pub(super) fn iso(input: &mut &str) -> ModalResult<Date> {
    seq!(Date {
        year: year,
        _: '-',
        month: month,
        _: '-',
        day: day,
    })
    .parse_next(input)
}

fn year(input: &mut &str) -> ModalResult<i32> {
    fixed_number(4)
        .map(|year| year as i32)
        .context(StrContext::Label("year"))
        .parse_next(input)
}

fn month(input: &mut &str) -> ModalResult<u32> {
    fixed_number(2)
        .verify(|month: &u32| (1..=12).contains(month))
        .context(StrContext::Label("month"))
        .parse_next(input)
}

fn day(input: &mut &str) -> ModalResult<u32> {
    fixed_number(2)
        .verify(|day: &u32| (1..=31).contains(day))
        .context(StrContext::Label("day"))
        .parse_next(input)
}
