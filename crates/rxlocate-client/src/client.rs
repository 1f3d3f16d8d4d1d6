//! HTTP client for the Rite Aid store directory API.
//!
//! Wraps `reqwest` with directory-specific radius validation, envelope
//! status checking, and typed response deserialization. The `getStores`
//! endpoint honors at most [`MAX_RADIUS_MILES`]; a larger request is still
//! sent, with a [`RadiusAdvisory`] attached to the successful result so the
//! caller knows the service truncated the search.

use std::time::Duration;

use reqwest::{Client, Url};
use rxlocate_core::SearchResponse;

use crate::error::SearchError;

const DEFAULT_BASE_URL: &str = "https://www.riteaid.com/services/ext/v2/stores/getStores";

/// Largest search radius, in miles, the directory service honors.
pub const MAX_RADIUS_MILES: f64 = 25.0;

/// Client for the store directory `getStores` endpoint.
///
/// Use [`StoreLocatorClient::new`] for production or
/// [`StoreLocatorClient::with_base_url`] to point at a mock server in tests.
pub struct StoreLocatorClient {
    client: Client,
    base_url: Url,
}

/// Note that a requested radius exceeded [`MAX_RADIUS_MILES`]; the service
/// caps the search there, so the result covers less ground than asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusAdvisory {
    pub requested: f64,
}

/// A decoded directory response plus any radius advisory for the request.
#[derive(Debug)]
pub struct StoreSearch {
    pub response: SearchResponse,
    pub advisory: Option<RadiusAdvisory>,
}

impl StoreLocatorClient {
    /// Creates a new client pointed at the production directory endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SearchError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom endpoint URL (for testing with
    /// wiremock). `base_url` is the full `getStores` endpoint; query
    /// parameters are appended to it per request.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| SearchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Searches the directory for stores around a postal address.
    ///
    /// `address` is free-form (e.g. `"4 Walton St E, Willard, OH 44890"`);
    /// the service geocodes it and reports its resolution alongside the
    /// stores. `radius_miles` must be positive; values above
    /// [`MAX_RADIUS_MILES`] are sent as-is and flagged with an advisory on
    /// the result. Keeping the radius small keeps the response small.
    ///
    /// # Errors
    ///
    /// - [`SearchError::RadiusOutOfRange`] for a radius of zero or less,
    ///   before any request is made.
    /// - [`SearchError::Api`] if the service returns a non-`SUCCESS`
    ///   envelope; the service's own message is preserved.
    /// - [`SearchError::Http`] on network failure or non-2xx HTTP status.
    /// - [`SearchError::Deserialize`] if the body does not match the
    ///   expected envelope shape.
    pub async fn search(
        &self,
        address: &str,
        radius_miles: f64,
    ) -> Result<StoreSearch, SearchError> {
        let (body, advisory) = self.search_raw(address, radius_miles).await?;

        let response: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("getStores(address={address})"),
                source: e,
            })?;
        Self::check_service_status(&response)?;

        Ok(StoreSearch { response, advisory })
    }

    /// Searches the directory and returns the undecoded response body.
    ///
    /// Useful for archiving responses or inspecting fields the typed schema
    /// does not carry. The envelope status is not checked here; a service
    /// error comes back as body text.
    ///
    /// # Errors
    ///
    /// - [`SearchError::RadiusOutOfRange`] for a radius of zero or less,
    ///   before any request is made.
    /// - [`SearchError::Http`] on network failure or non-2xx HTTP status.
    pub async fn search_raw(
        &self,
        address: &str,
        radius_miles: f64,
    ) -> Result<(String, Option<RadiusAdvisory>), SearchError> {
        let advisory = Self::validate_radius(radius_miles)?;
        let url = self.search_url(address, radius_miles);
        tracing::debug!(%url, "requesting store directory");

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        Ok((body, advisory))
    }

    /// Rejects non-positive radii and flags oversize ones.
    fn validate_radius(radius_miles: f64) -> Result<Option<RadiusAdvisory>, SearchError> {
        if radius_miles <= 0.0 {
            return Err(SearchError::RadiusOutOfRange {
                radius: radius_miles,
            });
        }
        if radius_miles > MAX_RADIUS_MILES {
            tracing::warn!(
                requested = radius_miles,
                cap = MAX_RADIUS_MILES,
                "radius exceeds the service cap; results will be truncated"
            );
            return Ok(Some(RadiusAdvisory {
                requested: radius_miles,
            }));
        }
        Ok(None)
    }

    /// Builds the request URL with properly encoded query parameters.
    fn search_url(&self, address: &str, radius_miles: f64) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("pharmacyOnly", "false");
            pairs.append_pair("globalZipCodeRequired", "true");
            pairs.append_pair("address", address);
            pairs.append_pair("radius", &radius_miles.to_string());
        }
        url
    }

    /// Surfaces a non-`SUCCESS` envelope as an error, message preserved.
    fn check_service_status(response: &SearchResponse) -> Result<(), SearchError> {
        if response.is_success() {
            return Ok(());
        }
        Err(SearchError::Api {
            status: response.status.clone(),
            message: response.err_msg.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WILLARD: &str = "4 Walton St E, Willard, OH 44890";

    fn test_client() -> StoreLocatorClient {
        StoreLocatorClient::new(30, "rxlocate-test/0.1")
            .expect("client construction should not fail")
    }

    #[test]
    fn search_url_matches_the_live_endpoint_shape() {
        let url = test_client().search_url(WILLARD, 0.5);
        assert_eq!(
            url.as_str(),
            "https://www.riteaid.com/services/ext/v2/stores/getStores?pharmacyOnly=false\
             &globalZipCodeRequired=true&address=4+Walton+St+E%2C+Willard%2C+OH+44890&radius=0.5"
        );
    }

    #[test]
    fn search_url_formats_radius_without_trailing_zeros() {
        let client = test_client();
        let url = client.search_url(WILLARD, 3.1);
        assert!(url.as_str().ends_with("&radius=3.1"), "got: {url}");

        let url = client.search_url(WILLARD, 25.0);
        assert!(url.as_str().ends_with("&radius=25"), "got: {url}");

        let url = client.search_url(WILLARD, 999.0);
        assert!(url.as_str().ends_with("&radius=999"), "got: {url}");
    }

    #[test]
    fn radius_at_or_below_zero_is_fatal() {
        assert!(matches!(
            StoreLocatorClient::validate_radius(0.0),
            Err(SearchError::RadiusOutOfRange { .. })
        ));
        assert!(matches!(
            StoreLocatorClient::validate_radius(-1.0),
            Err(SearchError::RadiusOutOfRange { .. })
        ));
    }

    #[test]
    fn radius_within_the_cap_has_no_advisory() {
        let advisory = StoreLocatorClient::validate_radius(25.0).expect("cap is allowed");
        assert!(advisory.is_none());

        let advisory = StoreLocatorClient::validate_radius(0.5).expect("small radius is allowed");
        assert!(advisory.is_none());
    }

    #[test]
    fn radius_above_the_cap_yields_an_advisory() {
        let advisory = StoreLocatorClient::validate_radius(999.0)
            .expect("oversize radius is not an error")
            .expect("oversize radius carries an advisory");
        assert!((advisory.requested - 999.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = StoreLocatorClient::with_base_url(30, "rxlocate-test/0.1", "not a url");
        assert!(matches!(
            result,
            Err(SearchError::InvalidBaseUrl { .. })
        ));
    }
}
