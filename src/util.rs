//! Coordinate normalization and small display helpers

use chrono::DateTime;

/// A normalized (latitude, longitude) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

fn valid_pair(lat: f64, lng: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

/// Normalize to (latitude, longitude). Latitude must be -90 to 90, longitude
/// -180 to 180. If the backend delivered the pair swapped, correct it.
/// Identity wins when both interpretations are valid.
pub fn normalize_lat_lng(a: f64, b: f64) -> Option<LatLng> {
    if a.is_nan() || b.is_nan() {
        return None;
    }
    if valid_pair(a, b) {
        return Some(LatLng { lat: a, lng: b });
    }
    if valid_pair(b, a) {
        return Some(LatLng { lat: b, lng: a });
    }
    Some(LatLng { lat: a, lng: b })
}

/// Build a Google Maps search URL for a location, auto-correcting swapped
/// coordinates.
pub fn google_maps_url(latitude: f64, longitude: f64) -> String {
    match normalize_lat_lng(latitude, longitude) {
        Some(n) => format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            n.lat, n.lng
        ),
        None => "https://www.google.com/maps".to_string(),
    }
}

/// Render an RFC 3339 timestamp for display. Falls back to the raw string
/// when the backend sends something unparseable.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%b %d, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_preserved_when_valid() {
        let n = normalize_lat_lng(12.9, 77.6).unwrap();
        assert_eq!(n, LatLng { lat: 12.9, lng: 77.6 });
    }

    #[test]
    fn swapped_pair_is_corrected() {
        let n = normalize_lat_lng(100.0, 50.0).unwrap();
        assert_eq!(n, LatLng { lat: 50.0, lng: 100.0 });
    }

    #[test]
    fn unsalvageable_pair_passes_through() {
        // neither orientation is valid; keep the input rather than guess
        let n = normalize_lat_lng(45.0, 200.0).unwrap();
        assert_eq!(n, LatLng { lat: 45.0, lng: 200.0 });
    }

    #[test]
    fn normalization_is_idempotent() {
        let first = normalize_lat_lng(100.0, 50.0).unwrap();
        let second = normalize_lat_lng(first.lat, first.lng).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn nan_input_is_rejected() {
        assert!(normalize_lat_lng(f64::NAN, 10.0).is_none());
    }

    #[test]
    fn maps_url_uses_normalized_pair() {
        assert_eq!(
            google_maps_url(100.0, 50.0),
            "https://www.google.com/maps/search/?api=1&query=50,100"
        );
    }

    #[test]
    fn timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp("not a date"), "not a date");
        assert_eq!(
            format_timestamp("2024-05-01T10:30:00+00:00"),
            "May 01, 2024 10:30"
        );
    }
}
