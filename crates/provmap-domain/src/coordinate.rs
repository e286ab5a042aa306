//! Geographic coordinates

/// A WGS84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, positive north
    pub latitude: f64,

    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Exact-equality grouping key for this coordinate
    pub fn key(&self) -> CoordinateKey {
        CoordinateKey::from(*self)
    }
}

/// Hashable identity of a [`Coordinate`].
///
/// Two coordinates share a key only when both components are bit-for-bit
/// identical, so no distance tolerance is ever applied. `0.0` and `-0.0`
/// are normalized to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateKey {
    latitude_bits: u64,
    longitude_bits: u64,
}

impl From<Coordinate> for CoordinateKey {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            latitude_bits: canonical_bits(coordinate.latitude),
            longitude_bits: canonical_bits(coordinate.longitude),
        }
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
