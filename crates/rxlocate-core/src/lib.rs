pub mod links;
pub mod search;
pub mod store;

pub use search::{ResolvedAddress, SearchData, SearchResponse};
pub use store::{DayHours, HolidayHours, PickupDateAndTimes, Store, WeeklyHours};
