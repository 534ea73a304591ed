// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Find the UTC offset a timestamp literal was written with.
//!
//! The input is not assumed to have a fixed layout, so the offset is located by
//! scanning for the rightmost sign character instead of by position:
//!
//! 1. an empty literal, a literal without a `T` separator (date only) or a
//!    literal ending in `Z` is in UTC;
//! 2. otherwise everything from the last `+` is the offset;
//! 3. otherwise everything from the last `-` is the offset, provided that `-`
//!    comes after the last `:`. The hyphens of `YYYY-MM-DD` always precede
//!    the colons of `HH:MM:SS`, so such a `-` cannot be a date separator;
//! 4. anything else is in UTC.
//!
//! The substring is returned verbatim. Whatever trails a matched sign is
//! taken, even if it is not a well-formed offset; see
//! [`OffsetLiteral::to_fixed_offset`].

use std::fmt::{self, Display};

use chrono::FixedOffset;

use crate::items;

/// The offset a literal was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetLiteral<'a> {
    /// No explicit offset, or an explicit `Z`. Spelled `"UTC"`.
    Utc,
    /// The trailing `+HHMM` or `-HHMM` part of the literal, as written.
    Explicit(&'a str),
}

impl<'a> OffsetLiteral<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            OffsetLiteral::Utc => "UTC",
            OffsetLiteral::Explicit(s) => *s,
        }
    }

    pub fn is_utc(&self) -> bool {
        matches!(self, OffsetLiteral::Utc)
    }

    /// Interpret the literal as a fixed offset.
    ///
    /// `+HHMM`, `+HH:MM` and `+HH` (and their negative forms) are understood.
    /// Anything else that was extracted returns `None`.
    pub fn to_fixed_offset(&self) -> Option<FixedOffset> {
        match self {
            OffsetLiteral::Utc => FixedOffset::east_opt(0),
            OffsetLiteral::Explicit(s) => items::offset_literal(s),
        }
    }
}

impl Display for OffsetLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for OffsetLiteral<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for OffsetLiteral<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Extract the offset literal of a timestamp.
///
/// # Examples
///
/// ```
/// use parse_zone::extract_offset;
///
/// assert_eq!(extract_offset("2020-10-14T14:03:00+0200"), "+0200");
/// assert_eq!(extract_offset("2020-10-14T14:03:00-0200"), "-0200");
/// assert_eq!(extract_offset("2020-10-14T14:03:00Z"), "UTC");
/// assert_eq!(extract_offset("2020-10-14"), "UTC");
/// ```
pub fn extract_offset(date_str: &str) -> OffsetLiteral<'_> {
    if date_str.is_empty() || !date_str.contains('T') || date_str.ends_with('Z') {
        return OffsetLiteral::Utc;
    }

    if let Some(plus) = date_str.rfind('+') {
        return OffsetLiteral::Explicit(&date_str[plus..]);
    }

    let last_colon = date_str.rfind(':');
    match date_str.rfind('-') {
        // `None < Some(_)`, so a literal without any colon accepts its last `-`
        Some(minus) if Some(minus) > last_colon => OffsetLiteral::Explicit(&date_str[minus..]),
        _ => OffsetLiteral::Utc,
    }
}

/// [`extract_offset`] for a value that may be absent. An absent value is in
/// UTC.
pub fn extract_offset_opt(date_str: Option<&str>) -> OffsetLiteral<'_> {
    date_str.map_or(OffsetLiteral::Utc, extract_offset)
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::{extract_offset, extract_offset_opt, OffsetLiteral};

    #[test]
    fn empty_or_absent() {
        assert_eq!(extract_offset(""), OffsetLiteral::Utc);
        assert_eq!(extract_offset_opt(None), OffsetLiteral::Utc);
        assert_eq!(extract_offset_opt(Some("")), "UTC");
    }

    #[test]
    fn without_time() {
        assert_eq!(extract_offset("2020-10-14"), "UTC");
        // the hyphens of a date are never an offset
        assert_eq!(extract_offset("2020-10-14 14:03:00"), "UTC");
        assert_eq!(extract_offset("2020-10-14+0200"), "UTC");
    }

    #[test]
    fn without_offset() {
        assert_eq!(extract_offset("2020-10-14T14:03:00"), "UTC");
        assert_eq!(extract_offset("2020-10-14T14:03:00.123"), "UTC");
    }

    #[test]
    fn zulu() {
        assert_eq!(extract_offset("2020-10-14T14:03:00Z"), OffsetLiteral::Utc);
        // `Z` short-circuits even when a sign is present
        assert_eq!(extract_offset("2020-10-14T14:03:00+0200Z"), "UTC");
    }

    #[test]
    fn positive() {
        assert_eq!(
            extract_offset("2020-10-14T14:03:00+0200"),
            OffsetLiteral::Explicit("+0200")
        );
        assert_eq!(extract_offset("2019-03-02T07:19:00+00:00"), "+00:00");
        assert_eq!(extract_offset("2019-03-02T07:18:00+01:00"), "+01:00");
        assert_eq!(extract_offset("2020-10-14T14:03:00+02"), "+02");
    }

    #[test]
    fn negative() {
        assert_eq!(
            extract_offset("2020-10-14T14:03:00-0200"),
            OffsetLiteral::Explicit("-0200")
        );
        assert_eq!(extract_offset("2020-10-14T14:03:00.5-0930"), "-0930");
    }

    #[test]
    fn negative_with_colon() {
        // the `-` precedes the colon inside the offset itself
        assert_eq!(extract_offset("2020-10-14T14:03:00-02:00"), "UTC");
    }

    #[test]
    fn rightmost_sign_wins() {
        assert_eq!(extract_offset("2020-10-14T14:03:00+01+0200"), "+0200");
        assert_eq!(extract_offset("2020-10-14T14:03:00-0100-0200"), "-0200");
        // a `+` anywhere takes precedence over a later `-`
        assert_eq!(extract_offset("2020-10-14T14:03:00+01-02"), "+01-02");
    }

    #[test]
    fn garbage_is_taken_verbatim() {
        assert_eq!(extract_offset("Tomorrow+garbage"), "+garbage");
        assert_eq!(extract_offset("2020-10-14T1403"), "-14T1403");
        assert_eq!(extract_offset("Today at noon"), "UTC");
        // the separator is case sensitive
        assert_eq!(extract_offset("2020-10-14t14:03:00+0200"), "UTC");
    }

    #[test]
    fn pure() {
        let s = "2020-10-14T14:03:00+0200";
        assert_eq!(extract_offset(s), extract_offset(s));
    }

    #[test]
    fn to_fixed_offset() {
        assert_eq!(OffsetLiteral::Utc.to_fixed_offset(), FixedOffset::east_opt(0));
        assert_eq!(
            OffsetLiteral::Explicit("+0530").to_fixed_offset(),
            FixedOffset::east_opt(5 * 3600 + 1800)
        );
        assert_eq!(OffsetLiteral::Explicit("+garbage").to_fixed_offset(), None);
    }

    #[test]
    fn display() {
        assert_eq!(OffsetLiteral::Utc.to_string(), "UTC");
        assert_eq!(OffsetLiteral::Explicit("-0200").to_string(), "-0200");
        assert!(OffsetLiteral::Utc.is_utc());
        assert!(!OffsetLiteral::Explicit("+00:00").is_utc());
    }
}
