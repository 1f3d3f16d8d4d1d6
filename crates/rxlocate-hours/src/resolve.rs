//! Hour resolution and open/closed queries for store records.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use rxlocate_core::Store;

use crate::error::HoursError;
use crate::timespan::{parse_iso_date, span_for_date, TimeSpan};
use crate::timezone::zone_for;

/// General and pharmacy hours resolved for one store on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedHours {
    pub store: TimeSpan,
    pub pharmacy: TimeSpan,
}

/// Open flags for the two service areas at a queried instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenStatus {
    pub store: bool,
    pub pharmacy: bool,
}

/// Resolves a store's hours for an ISO calendar date.
///
/// Holiday overrides are scanned in the order the service sent them, and the
/// first entry whose date string matches the target date wins. Entries
/// visited during the scan are validated even when they do not match, so a
/// corrupt override list fails loudly instead of leaking through on
/// unrelated dates. Without a matching override, the date's weekday selects
/// from the weekly table; a store with no hours recorded for that weekday
/// (e.g. a closed pharmacy counter) is an error, never an open or empty
/// span.
///
/// # Errors
///
/// - [`HoursError::InvalidDate`] if `date` or a scanned holiday date is
///   malformed or not in the zero-padded `YYYY-MM-DD` layout.
/// - [`HoursError::ZoneNotFound`] / [`HoursError::ZoneInvalid`] if the
///   store's coordinates do not yield a usable zone.
/// - [`HoursError::MalformedRange`] / [`HoursError::OutOfOrder`] if the
///   selected hour strings do not parse.
pub fn resolve_hours(store: &Store, date: &str) -> Result<ResolvedHours, HoursError> {
    let day = parse_iso_date(date)?;
    resolve_hours_on(store, day)
}

fn resolve_hours_on(store: &Store, day: NaiveDate) -> Result<ResolvedHours, HoursError> {
    let tz = zone_for(store.latitude, store.longitude)?;

    // Overrides match on the literal date string. Scanned entries must be
    // canonical dates, so the comparison cannot be fooled by an equivalent
    // spelling of the same day.
    let date_key = day.to_string();
    for holiday in &store.holiday_hours {
        parse_iso_date(&holiday.holiday_date)?;
        if holiday.holiday_date == date_key {
            tracing::debug!(store = store.store_number, date = %day, "using holiday hours");
            return Ok(ResolvedHours {
                store: span_for_date(&holiday.store_hours, day, tz)?,
                pharmacy: span_for_date(&holiday.pharmacy_hours, day, tz)?,
            });
        }
    }

    let hours = store.weekly_hours().day(day.weekday());
    Ok(ResolvedHours {
        store: span_for_date(hours.store_hours, day, tz)?,
        pharmacy: span_for_date(hours.pharmacy_hours, day, tz)?,
    })
}

/// Parses an hour range against the next occurrence of a weekday.
///
/// "Next" is evaluated on the store's local calendar: the target date is
/// today when the weekday matches, otherwise the same weekday within the
/// following six days. The result is never in the past.
///
/// # Errors
///
/// Same failure cases as [`parse_time_span`](crate::parse_time_span), plus
/// the zone errors from [`zone_for`](crate::zone_for).
pub fn upcoming_weekday_span(
    weekday: Weekday,
    range: &str,
    latitude: f64,
    longitude: f64,
) -> Result<TimeSpan, HoursError> {
    let tz = zone_for(latitude, longitude)?;
    span_for_next(Utc::now().with_timezone(&tz), weekday, range)
}

fn span_for_next(
    now: DateTime<Tz>,
    weekday: Weekday,
    range: &str,
) -> Result<TimeSpan, HoursError> {
    let today = now.date_naive();
    let ahead =
        (weekday.num_days_from_sunday() + 7 - today.weekday().num_days_from_sunday()) % 7;
    let target = today + Days::new(u64::from(ahead));
    span_for_date(range, target, now.timezone())
}

/// Whether the store and its pharmacy are open at the given instant.
///
/// The instant may carry any zone; it is converted into the store's zone
/// before its calendar date is taken, so a query from another zone lands on
/// the store-local date even around midnight. Both intervals treat their
/// endpoints as closed: at the exact open or close instant the answer is
/// `false`.
///
/// # Errors
///
/// Propagates every failure case of [`resolve_hours`] for the store-local
/// date of `at`.
pub fn open_status_at<Z: TimeZone>(store: &Store, at: &DateTime<Z>) -> Result<OpenStatus, HoursError> {
    let tz = zone_for(store.latitude, store.longitude)?;
    let local = at.with_timezone(&tz);
    let hours = resolve_hours_on(store, local.date_naive())?;
    Ok(OpenStatus {
        store: local > hours.store.start && local < hours.store.end,
        pharmacy: local > hours.pharmacy.start && local < hours.pharmacy.end,
    })
}

#[cfg(test)]
mod tests {
    use chrono_tz::America::New_York;

    use super::*;

    fn wednesday_noon() -> DateTime<Tz> {
        // 2022-06-15 was a Wednesday.
        New_York
            .with_ymd_and_hms(2022, 6, 15, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn matching_weekday_resolves_to_today() {
        let span = span_for_next(wednesday_noon(), Weekday::Wed, "8:00am-10:00pm")
            .expect("range should parse");
        assert_eq!(span.start.date_naive().to_string(), "2022-06-15");
    }

    #[test]
    fn future_weekday_resolves_within_the_week() {
        let span = span_for_next(wednesday_noon(), Weekday::Thu, "8:00am-10:00pm")
            .expect("range should parse");
        assert_eq!(span.start.date_naive().to_string(), "2022-06-16");

        let span = span_for_next(wednesday_noon(), Weekday::Sun, "8:00am-10:00pm")
            .expect("range should parse");
        assert_eq!(span.start.date_naive().to_string(), "2022-06-19");
    }

    #[test]
    fn elapsed_weekday_rolls_forward_not_back() {
        // Tuesday has already passed; the following Tuesday is 6 days out.
        let span = span_for_next(wednesday_noon(), Weekday::Tue, "8:00am-10:00pm")
            .expect("range should parse");
        assert_eq!(span.start.date_naive().to_string(), "2022-06-21");

        let span = span_for_next(wednesday_noon(), Weekday::Mon, "8:00am-10:00pm")
            .expect("range should parse");
        assert_eq!(span.start.date_naive().to_string(), "2022-06-20");
    }
}
