// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Primitive combinators.

use winnow::{
    error::{ContextError, ErrMode, StrContext, StrContextValue},
    token::{one_of, take_while},
    ModalResult, Parser,
};

/// Parse a number written with exactly `width` decimal digits.
///
/// Leading zeroes are part of the width, so `fixed_number(2)` reads `"07"` as
/// 7 and refuses `"7:"`.
pub(super) fn fixed_number<'a>(width: usize) -> impl Parser<&'a str, u32, ErrMode<ContextError>> {
    take_while(width, |c: char| c.is_ascii_digit()).verify_map(|s: &str| s.parse().ok())
}

/// Parse a decimal fraction introduced by `.` or `,` and return it as a number
/// of nanoseconds. Digits past the ninth are dropped.
pub(super) fn nano_seconds(input: &mut &str) -> ModalResult<u32> {
    (
        one_of(['.', ',']),
        take_while(1.., |c: char| c.is_ascii_digit()),
    )
        .map(|(_, digits): (char, &str)| {
            digits
                .bytes()
                .chain(std::iter::repeat(b'0'))
                .take(9)
                .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
        })
        .parse_next(input)
}

/// Parse a `+` or `-` sign, returning `true` for `-`.
pub(super) fn sign(input: &mut &str) -> ModalResult<bool> {
    one_of(['+', '-']).map(|c| c == '-').parse_next(input)
}

/// Create a context error with a reason.
pub(super) fn ctx_err(reason: &'static str) -> ContextError {
    let mut err = ContextError::new();
    err.push(StrContext::Expected(StrContextValue::Description(reason)));
    err
}
