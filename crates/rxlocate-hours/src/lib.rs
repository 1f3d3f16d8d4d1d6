pub mod error;
pub mod resolve;
pub mod timespan;
pub mod timezone;

pub use error::HoursError;
pub use resolve::{
    open_status_at, resolve_hours, upcoming_weekday_span, OpenStatus, ResolvedHours,
};
pub use timespan::{parse_time_span, TimeSpan, DATE_FORMAT};
pub use timezone::zone_for;
