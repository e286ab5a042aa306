//! Offline geocoder backed by a fixed lookup table

use crate::GeocodeError;
use provmap_domain::traits::Geocoder;
use provmap_domain::Coordinate;
use std::collections::HashMap;

/// Resolves locations from a pre-built table
///
/// Lookups are exact on the location text after trimming surrounding
/// whitespace. Locations missing from the table are "not found".
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    locations: HashMap<String, Coordinate>,
}

impl StaticGeocoder {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a location
    pub fn insert(&mut self, location: impl Into<String>, coordinate: Coordinate) {
        self.locations
            .insert(location.into().trim().to_string(), coordinate);
    }

    /// Number of known locations
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// True if the table has no locations
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl FromIterator<(String, Coordinate)> for StaticGeocoder {
    fn from_iter<I: IntoIterator<Item = (String, Coordinate)>>(iter: I) -> Self {
        let mut geocoder = Self::new();
        for (location, coordinate) in iter {
            geocoder.insert(location, coordinate);
        }
        geocoder
    }
}

impl Geocoder for StaticGeocoder {
    type Error = GeocodeError;

    fn geocode(&self, location: &str) -> Result<Option<Coordinate>, Self::Error> {
        Ok(self.locations.get(location.trim()).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_trims_whitespace() {
        let mut geocoder = StaticGeocoder::new();
        geocoder.insert(" Rome ", Coordinate::new(41.9, 12.5));

        assert_eq!(geocoder.geocode("Rome").unwrap(), Some(Coordinate::new(41.9, 12.5)));
        assert_eq!(geocoder.geocode("  Rome").unwrap(), Some(Coordinate::new(41.9, 12.5)));
        assert_eq!(geocoder.geocode("Milan").unwrap(), None);
    }

    #[test]
    fn test_from_iter() {
        let geocoder: StaticGeocoder = vec![
            ("A".to_string(), Coordinate::new(1.0, 1.0)),
            ("B".to_string(), Coordinate::new(2.0, 2.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(geocoder.len(), 2);
        assert!(!geocoder.is_empty());
    }
}
