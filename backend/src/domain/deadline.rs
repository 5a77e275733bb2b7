//! Deadline parsing.
//!
//! Clients send deadlines either as text or as milliseconds since the Unix
//! epoch. Accepted text forms, tried in order:
//!
//! - RFC 3339 (`2030-01-01T10:00:00Z`, `2030-01-01T10:00:00.250+02:00`)
//! - ISO date-time with a compact offset (`2030-01-01T10:00:00+0200`)
//! - ISO date-time without an offset, read as UTC (`2030-01-01T10:00`)
//! - calendar dates, read as UTC midnight (`2030-01-01`, `2030-1-1`,
//!   `2030/01/01`, `2030-01`, `2030`)
//! - dates with a month name, read as UTC midnight (`January 1, 2030`,
//!   `Jan 1 2030`, `1 January 2030`)
//! - RFC 2822 (`Tue, 1 Jan 2030 10:00:00 +0000`)

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use thiserror::Error;

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
const NAMED_MONTH_FORMATS: [&str; 3] = ["%B %d, %Y", "%B %d %Y", "%d %B %Y"];

/// Raw deadline value lifted from a request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlineInput {
    /// Textual date or date-time.
    Text(String),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
}

/// Reasons a deadline value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeadlineError {
    /// No usable deadline value was supplied.
    #[error("deadline is missing")]
    Missing,
    /// The text is not a recognised date or date-time.
    #[error("deadline `{value}` is not a valid date")]
    Unparseable { value: String },
    /// The epoch offset falls outside the representable range.
    #[error("deadline {millis}ms is outside the supported range")]
    OutOfRange { millis: i64 },
}

/// A validated point in time by which a todo should be done.
///
/// Serialises as an RFC 3339 UTC timestamp with millisecond precision.
///
/// # Examples
/// ```
/// use todo_backend::domain::{Deadline, DeadlineInput};
///
/// let deadline = Deadline::parse(&DeadlineInput::Text("2030-01-01".into()))
///     .expect("calendar dates are accepted");
/// assert_eq!(deadline.to_string(), "2030-01-01T00:00:00.000Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Deadline(DateTime<Utc>);

impl Deadline {
    /// Parse a raw deadline value.
    pub fn parse(input: &DeadlineInput) -> Result<Self, DeadlineError> {
        match input {
            DeadlineInput::Text(text) => parse_text(text).map(Self),
            DeadlineInput::EpochMillis(millis) => DateTime::<Utc>::from_timestamp_millis(*millis)
                .map(Self)
                .ok_or(DeadlineError::OutOfRange { millis: *millis }),
        }
    }

    /// Wrap an already validated timestamp.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Access the underlying timestamp.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_timestamp(&self.0))
    }
}

impl Serialize for Deadline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_timestamp(&self.0, serializer)
    }
}

/// Render a timestamp the way every timestamp in a response body is rendered.
pub(crate) fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn serialize_timestamp<S: Serializer>(
    at: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(at))
}

fn parse_text(raw: &str) -> Result<DateTime<Utc>, DeadlineError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(DeadlineError::Missing);
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Ok(at.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(at) = DateTime::parse_from_str(text, format) {
            return Ok(at.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(at.and_utc());
        }
    }
    let date = parse_calendar_date(text).or_else(|| {
        NAMED_MONTH_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    });
    if let Some(at) = date.and_then(|date| date.and_hms_opt(0, 0, 0)) {
        return Ok(at.and_utc());
    }
    if let Ok(at) = DateTime::parse_from_rfc2822(text) {
        return Ok(at.with_timezone(&Utc));
    }

    Err(DeadlineError::Unparseable {
        value: raw.to_owned(),
    })
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`, with `-` or `/` between the parts.
/// Month and day may drop their leading zero; missing parts default to the
/// first.
fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let separator = if text.contains('/') { '/' } else { '-' };
    let mut parts = text.split(separator);
    let year = parts.next().filter(|year| is_digits(year, 4..=4))?;
    let mut next_part = || match parts.next() {
        None => Some(1),
        Some(part) if is_digits(part, 1..=2) => part.parse().ok(),
        Some(_) => None,
    };
    let month = next_part()?;
    let day = next_part()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, day)
}

fn is_digits(part: &str, len: RangeInclusive<usize>) -> bool {
    len.contains(&part.len()) && part.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn text(value: &str) -> DeadlineInput {
        DeadlineInput::Text(value.to_owned())
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .expect("valid fixture timestamp")
    }

    #[rstest]
    #[case("2030-01-01", utc(2030, 1, 1, 0, 0, 0))]
    #[case("2030-06", utc(2030, 6, 1, 0, 0, 0))]
    #[case("2030", utc(2030, 1, 1, 0, 0, 0))]
    #[case("2030-01-01T10:30:00Z", utc(2030, 1, 1, 10, 30, 0))]
    #[case("2030-01-01T10:30:00+02:00", utc(2030, 1, 1, 8, 30, 0))]
    #[case("2030-01-01T10:30:00+0200", utc(2030, 1, 1, 8, 30, 0))]
    #[case("2030-01-01T10:30", utc(2030, 1, 1, 10, 30, 0))]
    #[case("2030-01-01 10:30:15", utc(2030, 1, 1, 10, 30, 15))]
    #[case("Tue, 1 Jan 2030 10:00:00 +0000", utc(2030, 1, 1, 10, 0, 0))]
    #[case("  2030-01-01  ", utc(2030, 1, 1, 0, 0, 0))]
    #[case("2030-1-1", utc(2030, 1, 1, 0, 0, 0))]
    #[case("2030/01/01", utc(2030, 1, 1, 0, 0, 0))]
    #[case("2030/6/15", utc(2030, 6, 15, 0, 0, 0))]
    #[case("January 1, 2030", utc(2030, 1, 1, 0, 0, 0))]
    #[case("Jan 15 2030", utc(2030, 1, 15, 0, 0, 0))]
    #[case("1 January 2030", utc(2030, 1, 1, 0, 0, 0))]
    fn accepts_common_date_forms(#[case] raw: &str, #[case] expected: DateTime<Utc>) {
        let deadline = Deadline::parse(&text(raw)).expect("deadline parses");
        assert_eq!(deadline.as_datetime(), &expected);
    }

    #[rstest]
    #[case("not-a-date")]
    #[case("2030-13-01")]
    #[case("2030-02-30")]
    #[case("30-01-01")]
    #[case("2030-001-01")]
    #[case("2030-01/01")]
    #[case("2030/02/30")]
    #[case("Smarch 1, 2030")]
    #[case("tomorrow")]
    fn rejects_unparseable_text(#[case] raw: &str) {
        assert_eq!(
            Deadline::parse(&text(raw)),
            Err(DeadlineError::Unparseable {
                value: raw.to_owned()
            })
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_text_is_missing(#[case] raw: &str) {
        assert_eq!(Deadline::parse(&text(raw)), Err(DeadlineError::Missing));
    }

    #[rstest]
    fn epoch_millis_are_accepted() {
        let deadline =
            Deadline::parse(&DeadlineInput::EpochMillis(1_893_456_000_000)).expect("in range");
        assert_eq!(deadline.as_datetime(), &utc(2030, 1, 1, 0, 0, 0));
    }

    #[rstest]
    fn epoch_millis_out_of_range_are_rejected() {
        assert_eq!(
            Deadline::parse(&DeadlineInput::EpochMillis(i64::MAX)),
            Err(DeadlineError::OutOfRange { millis: i64::MAX })
        );
    }

    #[rstest]
    fn serialises_as_millisecond_utc_timestamp() {
        let deadline = Deadline::from_datetime(utc(2030, 1, 1, 0, 0, 0));
        let json = serde_json::to_value(deadline).expect("serialise deadline");
        assert_eq!(json, serde_json::json!("2030-01-01T00:00:00.000Z"));
    }
}
