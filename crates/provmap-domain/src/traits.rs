//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the layout logic and
//! infrastructure. Implementations live in other crates.

use crate::{Coordinate, DrawingInstructions};

/// Resolves free-text locations to coordinates
///
/// Implemented by the infrastructure layer (provmap-geocode)
pub trait Geocoder {
    /// Error type for provider failures (network, auth, quota)
    type Error;

    /// Look up a location.
    ///
    /// `Ok(None)` means the provider answered but found nothing usable;
    /// `Err` means the provider itself failed.
    fn geocode(&self, location: &str) -> Result<Option<Coordinate>, Self::Error>;
}

/// Approximates the geodesic between two coordinates
///
/// Implemented by provmap-layout
pub trait GeodesicInterpolator {
    /// Return exactly `count` evenly spaced points strictly between `from`
    /// and `to`, ordered from `from` towards `to`.
    fn interpolate(&self, from: Coordinate, to: Coordinate, count: usize) -> Vec<Coordinate>;
}

/// Serializes drawing instructions into a document
///
/// Implemented by the presentation layer (provmap-render)
pub trait MapRenderer {
    /// Error type for rendering operations
    type Error;

    /// Produce the complete output document
    fn render(&self, instructions: &DrawingInstructions) -> Result<String, Self::Error>;
}
