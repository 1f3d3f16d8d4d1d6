use chrono::DateTime;
use chrono_tz::Tz;
use thiserror::Error;

/// Errors returned by the hours resolution engine.
#[derive(Debug, Error)]
pub enum HoursError {
    /// A date string did not parse as a zero-padded ISO calendar date.
    #[error("invalid calendar date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// An hour-range string did not follow the `<open>-<close>` grammar.
    #[error("malformed hour range '{range}': {reason}")]
    MalformedRange { range: String, reason: String },

    /// A range's open time was not strictly before its close time.
    #[error("hour range out of order: {start} is not before {end}")]
    OutOfOrder {
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    },

    /// The coordinates did not map to any known time zone.
    #[error("no time zone found for coordinates ({latitude}, {longitude})")]
    ZoneNotFound { latitude: f64, longitude: f64 },

    /// The zone lookup produced a name the zone database does not carry.
    #[error("unusable time zone name '{name}': {reason}")]
    ZoneInvalid { name: String, reason: String },
}
