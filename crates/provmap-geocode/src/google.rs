//! Google Geocoding API provider
//!
//! Resolves free-text addresses through
//! `https://maps.googleapis.com/maps/api/geocode/json`.
//!
//! # Features
//!
//! - Blocking HTTP, one request per lookup
//! - Configurable endpoint and request timeout
//! - Provider status codes mapped onto [`GeocodeError`]
//!
//! No retries are attempted; a failed request aborts the lookup.
//!
//! # Examples
//!
//! ```no_run
//! use provmap_domain::traits::Geocoder;
//! use provmap_geocode::GoogleGeocoder;
//!
//! let geocoder = GoogleGeocoder::from_env().unwrap();
//! let paris = geocoder.geocode("Paris, France").unwrap();
//! ```

use crate::GeocodeError;
use provmap_domain::traits::Geocoder;
use provmap_domain::Coordinate;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Default Google Geocoding API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GOOGLE_GEOLOCATOR_API_KEY";

/// Default timeout for a geocoding request (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Google Geocoding API provider
pub struct GoogleGeocoder {
    endpoint: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

/// Top-level response of the geocode endpoint
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
    #[serde(default)]
    formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: Option<f64>,
    lng: Option<f64>,
}

impl GoogleGeocoder {
    /// Create a provider against `endpoint`
    ///
    /// # Errors
    ///
    /// Returns error if the API key is empty or the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GeocodeError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeocodeError::MissingApiKey(API_KEY_ENV.to_string()));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeocodeError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key,
            client,
        })
    }

    /// Create a provider on the default endpoint, reading the key from
    /// `GOOGLE_GEOLOCATOR_API_KEY`
    pub fn from_env() -> Result<Self, GeocodeError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| GeocodeError::MissingApiKey(API_KEY_ENV.to_string()))?;
        Self::new(DEFAULT_ENDPOINT, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// The endpoint requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Geocoder for GoogleGeocoder {
    type Error = GeocodeError;

    fn geocode(&self, location: &str) -> Result<Option<Coordinate>, Self::Error> {
        debug!(location, "geocoding");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("address", location), ("key", self.api_key.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Communication(format!("HTTP {}", status)));
        }

        let body: GeocodeResponse = response.json()?;
        interpret(body)
    }
}

/// Map a decoded API response onto the geocoder contract
fn interpret(response: GeocodeResponse) -> Result<Option<Coordinate>, GeocodeError> {
    let detail = || {
        response
            .error_message
            .clone()
            .unwrap_or_else(|| response.status.clone())
    };

    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(None),
        "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => return Err(GeocodeError::QuotaExceeded(detail())),
        "REQUEST_DENIED" => return Err(GeocodeError::RequestDenied(detail())),
        "INVALID_REQUEST" => return Err(GeocodeError::InvalidRequest(detail())),
        _ => return Err(GeocodeError::Other(detail())),
    }

    let Some(first) = response.results.first() else {
        return Ok(None);
    };

    match (first.geometry.location.lat, first.geometry.location.lng) {
        (Some(latitude), Some(longitude)) => {
            debug!(
                address = first.formatted_address.as_deref().unwrap_or(""),
                latitude, longitude, "geocoded"
            );
            Ok(Some(Coordinate::new(latitude, longitude)))
        }
        _ => Ok(None),
    }
}
