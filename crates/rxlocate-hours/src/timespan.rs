//! Hour-range parsing into zone-aware instants.
//!
//! The directory emits a day's hours as a single range string in one of two
//! clock layouts, `"8:00am-10:00pm"` or `"8:00 AM-10:00 PM"`. The layout of
//! the range's first half decides how both halves are read; a range mixing
//! the two layouts is malformed. Wall-clock times are pinned to a calendar
//! date in the store's zone, so the resulting instants carry the correct
//! offset on either side of a daylight-saving transition.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::HoursError;

/// Date layout used throughout the directory API, e.g. `"2022-05-30"`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Zone-aware interval for one day's hours. Open strictly before close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// The two clock layouts observed in directory responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HourFormat {
    /// Lowercase meridiem, no space: `"3:04pm"`.
    Compact,
    /// Uppercase meridiem after a space: `"3:04 PM"`.
    Spaced,
}

impl HourFormat {
    /// A trailing lowercase `m` on the first half marks the compact layout.
    fn detect(first_half: &str) -> Self {
        if first_half.ends_with('m') {
            Self::Compact
        } else {
            Self::Spaced
        }
    }

    fn chrono_format(self) -> &'static str {
        match self {
            Self::Compact => "%I:%M%P",
            Self::Spaced => "%I:%M %p",
        }
    }

    fn layout_name(self) -> &'static str {
        match self {
            Self::Compact => "3:04pm",
            Self::Spaced => "3:04 PM",
        }
    }

    /// Layout-specific suffix check. chrono's meridiem items match
    /// case-insensitively and its literal-space item matches zero spaces, so
    /// this is what actually keeps the two layouts from blurring together.
    fn matches_suffix(self, clock: &str) -> bool {
        match self {
            Self::Compact => clock
                .strip_suffix("am")
                .or_else(|| clock.strip_suffix("pm"))
                .is_some_and(|rest| rest.ends_with(|c: char| c.is_ascii_digit())),
            Self::Spaced => clock.ends_with(" AM") || clock.ends_with(" PM"),
        }
    }
}

/// Parses a day's hour range into concrete instants in the given zone.
///
/// `range` is two clock times joined by a single `-`; `date` is the ISO
/// calendar date the hours apply to. A wall-clock time skipped by a
/// daylight-saving gap is rejected; a repeated one resolves to its earlier
/// occurrence.
///
/// # Errors
///
/// - [`HoursError::InvalidDate`] if `date` is not a well-formed
///   zero-padded ISO date.
/// - [`HoursError::MalformedRange`] if the range grammar or either clock
///   time is invalid, or a time falls in a daylight-saving gap.
/// - [`HoursError::OutOfOrder`] if the open instant is not strictly before
///   the close instant.
pub fn parse_time_span(range: &str, date: &str, tz: Tz) -> Result<TimeSpan, HoursError> {
    let day = parse_iso_date(date)?;
    span_for_date(range, day, tz)
}

/// Range parsing against an already-validated calendar date.
pub(crate) fn span_for_date(range: &str, day: NaiveDate, tz: Tz) -> Result<TimeSpan, HoursError> {
    let Some((open, close)) = split_range(range) else {
        return Err(malformed(
            range,
            "expected exactly one '-' between open and close times".to_string(),
        ));
    };

    let format = HourFormat::detect(open);
    let start = instant_on(range, day, half_to_time(range, format, open)?, tz)?;
    let end = instant_on(range, day, half_to_time(range, format, close)?, tz)?;

    if start >= end {
        return Err(HoursError::OutOfOrder { start, end });
    }
    Ok(TimeSpan { start, end })
}

pub(crate) fn parse_iso_date(value: &str) -> Result<NaiveDate, HoursError> {
    let day = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| HoursError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    // chrono accepts single-digit month and day fields; only the canonical
    // zero-padded form round-trips, so "2016-12-5" is rejected here.
    if day.to_string() != value {
        return Err(HoursError::InvalidDate {
            value: value.to_string(),
            reason: "expected the zero-padded YYYY-MM-DD layout".to_string(),
        });
    }
    Ok(day)
}

fn split_range(range: &str) -> Option<(&str, &str)> {
    let (open, close) = range.split_once('-')?;
    if close.contains('-') {
        return None;
    }
    Some((open, close))
}

fn half_to_time(range: &str, format: HourFormat, clock: &str) -> Result<NaiveTime, HoursError> {
    if !format.matches_suffix(clock) {
        return Err(malformed(
            range,
            format!(
                "'{clock}' does not match the detected '{}' layout",
                format.layout_name()
            ),
        ));
    }
    NaiveTime::parse_from_str(clock, format.chrono_format())
        .map_err(|e| malformed(range, format!("invalid clock time '{clock}': {e}")))
}

fn instant_on(
    range: &str,
    day: NaiveDate,
    time: NaiveTime,
    tz: Tz,
) -> Result<DateTime<Tz>, HoursError> {
    match tz.from_local_datetime(&day.and_time(time)) {
        LocalResult::Single(instant) => Ok(instant),
        // A fall-back transition repeats the hour; take the first pass.
        LocalResult::Ambiguous(earlier, _) => Ok(earlier),
        LocalResult::None => Err(malformed(
            range,
            format!("{time} does not exist on {day} in {tz}"),
        )),
    }
}

fn malformed(range: &str, reason: String) -> HoursError {
    HoursError::MalformedRange {
        range: range.to_string(),
        reason,
    }
}
