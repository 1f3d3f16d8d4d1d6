//! Store records returned by the `getStores` directory endpoint.
//!
//! ## Observed shape from the live v2 endpoint
//!
//! ### Hour strings
//! Weekly and holiday hours are single-range strings in one of two layouts,
//! `"8:00am-10:00pm"` or `"8:00 AM-10:00 PM"`. Individual stores use one
//! layout or the other; the two are never mixed inside one range. Stores
//! without a pharmacy return `""` for every `rxHrs*` field.
//!
//! ### `timeZone`
//! A short abbreviation such as `"EST"`, not an IANA zone name, and not
//! adjusted for daylight saving. It is carried through as data only; the
//! store's `latitude`/`longitude` are what actually locate its zone.
//!
//! ### `holidayHours`
//! A list of date-keyed overrides. The service does not guarantee unique
//! dates, and the order entries arrive in is meaningful: the first entry for
//! a date is the one in effect.
//!
//! ### `pickupDateAndTimes.specialHours`
//! A map with dynamic ISO-date keys, e.g. `{"2022-05-28": "1:00 PM-5:00 PM"}`.
//! Omitted entirely for stores without package pickup.

use std::collections::HashMap;

use chrono::Weekday;
use serde::Deserialize;

/// One store entry from the directory response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(default)]
    pub store_number: u32,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub state: String,

    /// Five-digit zip. See [`Store::full_zip_code`] for the zip+4 form.
    #[serde(default)]
    pub zipcode: String,

    /// Zone abbreviation as reported by the service (e.g. `"EST"`).
    /// Informational only; hour calculations use the coordinates.
    #[serde(default)]
    pub time_zone: String,

    #[serde(default)]
    pub full_zip_code: String,

    /// Formatted phone number, e.g. `"(419) 935-3900"`.
    #[serde(default)]
    pub full_phone: String,

    #[serde(default)]
    pub location_description: String,

    #[serde(default)]
    pub store_hours_monday: String,

    #[serde(default)]
    pub store_hours_tuesday: String,

    #[serde(default)]
    pub store_hours_wednesday: String,

    #[serde(default)]
    pub store_hours_thursday: String,

    #[serde(default)]
    pub store_hours_friday: String,

    #[serde(default)]
    pub store_hours_saturday: String,

    #[serde(default)]
    pub store_hours_sunday: String,

    /// Pharmacy hours, `""` when the store has no pharmacy.
    #[serde(default)]
    pub rx_hrs_mon: String,

    #[serde(default)]
    pub rx_hrs_tue: String,

    #[serde(default)]
    pub rx_hrs_wed: String,

    #[serde(default)]
    pub rx_hrs_thu: String,

    #[serde(default)]
    pub rx_hrs_fri: String,

    #[serde(default)]
    pub rx_hrs_sat: String,

    #[serde(default)]
    pub rx_hrs_sun: String,

    #[serde(default)]
    pub store_type: String,

    #[serde(default)]
    pub latitude: f64,

    #[serde(default)]
    pub longitude: f64,

    /// Brand name of the location, e.g. `"Rite Aid"`.
    #[serde(default)]
    pub name: String,

    /// Distance from the resolved search address, in miles.
    #[serde(default)]
    pub miles_from_center: f64,

    #[serde(default)]
    pub special_services_keys: Vec<String>,

    /// Date-keyed hour overrides. First entry for a date wins.
    #[serde(default)]
    pub holiday_hours: Vec<HolidayHours>,

    #[serde(default)]
    pub pickup_date_and_times: PickupDateAndTimes,
}

impl Store {
    /// Single-line postal address: `"Name, Address, City, ST ZIP+4"`.
    #[must_use]
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {}, {} {}",
            self.name, self.address, self.city, self.state, self.full_zip_code
        )
    }

    /// Borrowed weekday-indexed view over the fourteen hour strings.
    #[must_use]
    pub fn weekly_hours(&self) -> WeeklyHours<'_> {
        WeeklyHours {
            days: [
                DayHours {
                    store_hours: &self.store_hours_sunday,
                    pharmacy_hours: &self.rx_hrs_sun,
                },
                DayHours {
                    store_hours: &self.store_hours_monday,
                    pharmacy_hours: &self.rx_hrs_mon,
                },
                DayHours {
                    store_hours: &self.store_hours_tuesday,
                    pharmacy_hours: &self.rx_hrs_tue,
                },
                DayHours {
                    store_hours: &self.store_hours_wednesday,
                    pharmacy_hours: &self.rx_hrs_wed,
                },
                DayHours {
                    store_hours: &self.store_hours_thursday,
                    pharmacy_hours: &self.rx_hrs_thu,
                },
                DayHours {
                    store_hours: &self.store_hours_friday,
                    pharmacy_hours: &self.rx_hrs_fri,
                },
                DayHours {
                    store_hours: &self.store_hours_saturday,
                    pharmacy_hours: &self.rx_hrs_sat,
                },
            ],
        }
    }
}

/// Hour override for a single calendar date.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayHours {
    /// ISO date the override applies to, e.g. `"2016-12-25"`.
    #[serde(default)]
    pub holiday_date: String,

    #[serde(default)]
    pub store_hours: String,

    #[serde(default)]
    pub pharmacy_hours: String,
}

/// Package-pickup scheduling block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupDateAndTimes {
    #[serde(default)]
    pub regular_hours: Vec<String>,

    #[serde(default)]
    pub default_time: String,

    #[serde(default)]
    pub earliest: String,

    /// Dynamic ISO-date keys mapping to hour ranges.
    #[serde(default)]
    pub special_hours: HashMap<String, String>,
}

/// Hour strings for one weekday.
#[derive(Debug, Clone, Copy)]
pub struct DayHours<'a> {
    pub store_hours: &'a str,
    pub pharmacy_hours: &'a str,
}

/// Weekday-indexed table of hour strings, Sunday first.
///
/// Built by [`Store::weekly_hours`]; the only lookup path from a weekday to
/// that day's general and pharmacy hour strings.
#[derive(Debug, Clone, Copy)]
pub struct WeeklyHours<'a> {
    days: [DayHours<'a>; 7],
}

impl<'a> WeeklyHours<'a> {
    /// Hour strings for the given weekday.
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> DayHours<'a> {
        self.days[weekday.num_days_from_sunday() as usize]
    }
}
