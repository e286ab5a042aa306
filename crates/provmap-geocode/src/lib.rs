//! provmap Geocoding Layer
//!
//! Implementations of the [`Geocoder`] port from `provmap-domain`, plus the
//! filter that turns raw provenance entries into resolved points.
//!
//! # Providers
//!
//! - `GoogleGeocoder`: Google Geocoding API over blocking HTTP
//! - `StaticGeocoder`: fixed lookup table, for offline runs
//! - `MockGeocoder`: deterministic mock for testing
//!
//! # Examples
//!
//! ```
//! use provmap_domain::ProvenanceEntry;
//! use provmap_geocode::{resolve_entries, MockGeocoder};
//!
//! let mut geocoder = MockGeocoder::default();
//! geocoder.add_location("Paris", 48.8566, 2.3522);
//!
//! let entries = vec![ProvenanceEntry::at("Paris"), ProvenanceEntry::at("Atlantis")];
//! let report = resolve_entries(&geocoder, &entries).unwrap();
//! assert_eq!(report.points.len(), 1);
//! assert_eq!(report.dropped.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod google;
pub mod resolve;
pub mod table;

use provmap_domain::traits::Geocoder;
use provmap_domain::Coordinate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use google::GoogleGeocoder;
pub use resolve::{resolve_entries, DropReason, DroppedEntry, ResolutionReport};
pub use table::StaticGeocoder;

/// Errors that can occur while talking to a geocoding provider
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// Network or transport error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Provider answered with something we could not interpret
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider quota or rate limit exhausted
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Provider rejected the credentials or the request
    #[error("Request denied: {0}")]
    RequestDenied(String),

    /// Provider considered the request malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Credentials were not supplied
    #[error("Missing API key: set {0}")]
    MissingApiKey(String),

    /// Generic error
    #[error("Geocoding error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL carries the API key
        let e = e.without_url();
        if e.is_decode() {
            GeocodeError::InvalidResponse(e.to_string())
        } else if let Some(status) = e.status() {
            GeocodeError::Communication(format!("HTTP {}", status))
        } else {
            GeocodeError::Communication(e.to_string())
        }
    }
}

#[derive(Debug, Clone)]
enum MockResponse {
    Found(Coordinate),
    NotFound,
    Error,
}

/// Mock geocoder for deterministic testing
///
/// Returns pre-configured coordinates without making any network calls.
/// Locations that were never configured resolve to "not found".
///
/// # Examples
///
/// ```
/// use provmap_domain::traits::Geocoder;
/// use provmap_geocode::MockGeocoder;
///
/// let mut geocoder = MockGeocoder::default();
/// geocoder.add_location("A", 1.0, 1.0);
/// assert!(geocoder.geocode("A").unwrap().is_some());
/// assert!(geocoder.geocode("B").unwrap().is_none());
/// assert_eq!(geocoder.call_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockGeocoder {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGeocoder {
    /// Resolve `location` to the given coordinate
    pub fn add_location(&mut self, location: impl Into<String>, latitude: f64, longitude: f64) {
        self.respond(location, MockResponse::Found(Coordinate::new(latitude, longitude)));
    }

    /// Explicitly report `location` as not found
    pub fn add_not_found(&mut self, location: impl Into<String>) {
        self.respond(location, MockResponse::NotFound);
    }

    /// Configure to fail with a provider error for `location`
    pub fn add_error(&mut self, location: impl Into<String>) {
        self.respond(location, MockResponse::Error);
    }

    /// Get the number of times geocode was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Locations passed to geocode, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Reset the recorded calls
    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn respond(&mut self, location: impl Into<String>, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(location.into(), response);
    }
}

impl Geocoder for MockGeocoder {
    type Error = GeocodeError;

    fn geocode(&self, location: &str) -> Result<Option<Coordinate>, Self::Error> {
        self.calls.lock().unwrap().push(location.to_string());

        match self.responses.lock().unwrap().get(location) {
            Some(MockResponse::Found(coordinate)) => Ok(Some(*coordinate)),
            Some(MockResponse::Error) => Err(GeocodeError::Other("Mock error".to_string())),
            Some(MockResponse::NotFound) | None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_geocoder_found() {
        let mut geocoder = MockGeocoder::default();
        geocoder.add_location("Paris", 48.8566, 2.3522);

        let coordinate = geocoder.geocode("Paris").unwrap().unwrap();
        assert_eq!(coordinate, Coordinate::new(48.8566, 2.3522));
    }

    #[test]
    fn test_mock_geocoder_not_found() {
        let mut geocoder = MockGeocoder::default();
        geocoder.add_not_found("Atlantis");

        assert!(geocoder.geocode("Atlantis").unwrap().is_none());
        assert!(geocoder.geocode("El Dorado").unwrap().is_none());
    }

    #[test]
    fn test_mock_geocoder_error() {
        let mut geocoder = MockGeocoder::default();
        geocoder.add_error("bad");

        let result = geocoder.geocode("bad");
        assert!(matches!(result.unwrap_err(), GeocodeError::Other(_)));
    }

    #[test]
    fn test_mock_geocoder_records_calls() {
        let geocoder = MockGeocoder::default();
        geocoder.geocode("first").unwrap();
        geocoder.geocode("second").unwrap();

        assert_eq!(geocoder.calls(), vec!["first", "second"]);
        geocoder.reset_calls();
        assert_eq!(geocoder.call_count(), 0);
    }

    #[test]
    fn test_mock_geocoder_clone_shares_state() {
        let geocoder1 = MockGeocoder::default();
        let geocoder2 = geocoder1.clone();

        geocoder1.geocode("x").unwrap();

        // Both should share the same call log due to Arc
        assert_eq!(geocoder1.call_count(), 1);
        assert_eq!(geocoder2.call_count(), 1);
    }
}
