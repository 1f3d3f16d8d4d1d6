//! Response envelope for the `getStores` directory endpoint.
//!
//! ## Observed shape from the live v2 endpoint
//!
//! The envelope's own fields are PascalCase (`Status`, `ErrCde`, `ErrMsg`,
//! `ErrMsgDtl`) while everything under `data` is camelCase. `Status` is
//! `"SUCCESS"` on success; on failure the `Err*` fields describe the problem
//! and `data` may be absent. The `resolvedAddress` block is the upstream
//! geocoder's answer for the searched address, bounding box included.

use serde::Deserialize;

use crate::store::Store;

/// Envelope wrapped around every directory response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Status", default)]
    pub status: String,

    #[serde(rename = "ErrCde", default)]
    pub err_cde: String,

    #[serde(rename = "ErrMsg", default)]
    pub err_msg: String,

    #[serde(rename = "ErrMsgDtl", default)]
    pub err_msg_dtl: String,

    #[serde(default)]
    pub data: SearchData,
}

impl SearchResponse {
    /// Whether the service reported the request as `"SUCCESS"`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "SUCCESS"
    }
}

/// Payload of a successful search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    #[serde(default)]
    pub stores: Vec<Store>,

    #[serde(default)]
    pub global_zip_code: String,

    #[serde(default)]
    pub resolved_address: ResolvedAddress,

    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Geocoder resolution of the searched address.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAddress {
    #[serde(default)]
    pub address_line: String,

    /// State or province, e.g. `"OH"`.
    #[serde(default)]
    pub admin_district: String,

    #[serde(default)]
    pub altitude: f64,

    /// Geocoder confidence, e.g. `"High"`.
    #[serde(default)]
    pub confidence: String,

    #[serde(default)]
    pub calculation_method: String,

    #[serde(default)]
    pub country_region: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub district: String,

    #[serde(default)]
    pub formatted_address: String,

    #[serde(default)]
    pub geocode_best_view: GeocodeBestView,

    #[serde(default)]
    pub latitude: f64,

    /// City or town, e.g. `"Willard"`.
    #[serde(default)]
    pub locality: String,

    #[serde(default)]
    pub longitude: f64,

    #[serde(default)]
    pub postal_code: String,

    #[serde(default)]
    pub postal_town: String,
}

/// Bounding box around the resolved address.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeBestView {
    #[serde(default)]
    pub north_east_elements: GeocodeCorner,

    #[serde(default)]
    pub south_west_elements: GeocodeCorner,
}

/// One corner of the geocoder bounding box.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeCorner {
    #[serde(default)]
    pub altitude: f64,

    #[serde(default)]
    pub latitude: f64,

    #[serde(default)]
    pub longitude: f64,
}
