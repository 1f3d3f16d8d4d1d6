//! Outbound link builders for store records.
//!
//! URL query components here are encoded form-style (space as `+`, the
//! unreserved marks `-_.~` left bare) to match what the target services
//! expect in practice.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::store::Store;

const GOOGLE_MAPS_URL: &str = "http://maps.google.com/maps";
const FEDEX_PICKUP_URL: &str = "https://www.fedex.com/grd/rpp/ShowRPP.do";

/// FedEx tracking numbers are the last 12 digits of the label data.
const TRACKING_DIGITS: usize = 12;

/// Everything except alphanumerics and the unreserved marks `-_.~`.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Google Maps directions URL for the store's postal address.
#[must_use]
pub fn map_url(store: &Store) -> String {
    format!(
        "{GOOGLE_MAPS_URL}?daddr={}",
        query_escape(&store.full_address())
    )
}

/// FedEx in-store package pickup scheduling URL.
///
/// `tracking` may be a bare 12-digit tracking number, the digit payload of a
/// label's 2D barcode, or OCR text read off the label; see
/// [`fedex_tracking_number`] for how it is reduced.
#[must_use]
pub fn fedex_pickup_url(store: &Store, tracking: &str) -> String {
    format!(
        "{FEDEX_PICKUP_URL}?pickupType=Business&contactName=Onsite%20Manager\
         &state={}&pickupLocation=0&weightOver150=No&companyName={}&trackingId={}\
         &address1={}&city={}&zip={}&phoneNum={}&numPackages=1",
        query_escape(&store.state),
        query_escape(&store.name),
        query_escape(&fedex_tracking_number(tracking)),
        query_escape(&store.address),
        query_escape(&store.city),
        query_escape(&store.full_zip_code),
        query_escape(&digits_only(&store.full_phone)),
    )
}

/// Extracts the 12-digit FedEx tracking number from label data.
///
/// Strips non-digits first, then keeps the trailing 12 digits, so all of
/// these reduce to `"123456789012"`:
///
/// - `"123456789012"` (the tracking number itself)
/// - `"9622013140009780845100123456789012"` (2D barcode payload)
/// - `"9622 0131 4 (000 000 0000) 0 00 1234 5678 9012"` (label OCR)
#[must_use]
pub fn fedex_tracking_number(raw: &str) -> String {
    let mut digits = digits_only(raw);
    if digits.len() > TRACKING_DIGITS {
        digits.split_off(digits.len() - TRACKING_DIGITS)
    } else {
        digits
    }
}

/// Drops every non-digit, e.g. `"(419) 935-3900"` to `"4199353900"`.
#[must_use]
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn query_escape(value: &str) -> String {
    // The set above encodes spaces as %20; form-style wants '+'. A literal
    // '%' in the input is itself encoded, so this replace cannot collide.
    utf8_percent_encode(value, QUERY_SET)
        .to_string()
        .replace("%20", "+")
}
