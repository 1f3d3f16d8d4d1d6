//! Coordinate-to-zone lookup.

use std::sync::LazyLock;

use chrono_tz::Tz;
use tzf_rs::DefaultFinder;

use crate::error::HoursError;

// The finder parses its embedded polygon data on first use, which is too
// expensive to repeat per lookup. Read-only afterwards.
static FINDER: LazyLock<DefaultFinder> = LazyLock::new(DefaultFinder::new);

/// IANA zone containing the given point.
///
/// Store records carry a zone abbreviation, but it is ambiguous (`"EST"`
/// covers stores that do and do not observe daylight saving), so the
/// coordinates are authoritative for all hour calculations.
///
/// # Errors
///
/// - [`HoursError::ZoneNotFound`] if the point maps to no zone.
/// - [`HoursError::ZoneInvalid`] if the mapped name is not in the zone
///   database compiled into `chrono-tz`.
pub fn zone_for(latitude: f64, longitude: f64) -> Result<Tz, HoursError> {
    let name = FINDER.get_tz_name(longitude, latitude);
    if name.is_empty() {
        return Err(HoursError::ZoneNotFound { latitude, longitude });
    }
    tracing::debug!(name, latitude, longitude, "resolved store zone");
    name.parse::<Tz>().map_err(|e| HoursError::ZoneInvalid {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
