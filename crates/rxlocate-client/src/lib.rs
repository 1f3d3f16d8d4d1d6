pub mod client;
pub mod error;

pub use client::{RadiusAdvisory, StoreLocatorClient, StoreSearch, MAX_RADIUS_MILES};
pub use error::SearchError;
