//! Provenance events and their geocoded form

use crate::Coordinate;

/// A single provenance event as recorded in the input document
///
/// No identity beyond its position in the input; order is chronological.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProvenanceEntry {
    /// Free-text location (e.g., "Christie's, London")
    pub location: Option<String>,

    /// Owner or custodian at this step
    pub owner: Option<String>,

    /// What happened (e.g., "purchased", "loaned")
    pub action: Option<String>,

    /// Date as written in the record; never parsed
    pub date: Option<String>,

    /// The whereabouts between this event and the next one are undocumented
    pub next_location_unknown: bool,
}

impl ProvenanceEntry {
    /// Create an entry at a location with no other details
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    /// Set the owner
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the action
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Set the date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Mark the leg after this entry as unknown
    pub fn with_next_location_unknown(mut self, unknown: bool) -> Self {
        self.next_location_unknown = unknown;
        self
    }

    /// The location text if present and not blank
    pub fn geocodable_location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .filter(|location| !location.trim().is_empty())
    }

    /// Attach a geocoded coordinate, producing a [`ResolvedPoint`]
    ///
    /// Returns `None` when the entry has no geocodable location.
    pub fn resolve(&self, coordinate: Coordinate) -> Option<ResolvedPoint> {
        let location = self.geocodable_location()?;
        Some(ResolvedPoint {
            location: location.to_string(),
            coordinate,
            owner: self.owner.clone(),
            action: self.action.clone(),
            date: self.date.clone(),
            next_location_unknown: self.next_location_unknown,
        })
    }
}

/// A provenance entry whose location has been geocoded
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPoint {
    /// Location text as it appeared in the input
    pub location: String,

    /// Geocoded position; always present
    pub coordinate: Coordinate,

    /// Owner, copied verbatim
    pub owner: Option<String>,

    /// Action, copied verbatim
    pub action: Option<String>,

    /// Date, copied verbatim
    pub date: Option<String>,

    /// The leg leaving this point is undocumented
    pub next_location_unknown: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_location_is_not_geocodable() {
        assert!(ProvenanceEntry::default().geocodable_location().is_none());
        assert!(ProvenanceEntry::at("").geocodable_location().is_none());
        assert!(ProvenanceEntry::at("   ").geocodable_location().is_none());
        assert_eq!(ProvenanceEntry::at("Rome").geocodable_location(), Some("Rome"));
    }

    #[test]
    fn test_resolve_copies_fields() {
        let entry = ProvenanceEntry::at("Rome")
            .with_owner("Borghese")
            .with_action("purchased")
            .with_date("1607")
            .with_next_location_unknown(true);

        let point = entry.resolve(Coordinate::new(41.9, 12.5)).unwrap();
        assert_eq!(point.location, "Rome");
        assert_eq!(point.owner.as_deref(), Some("Borghese"));
        assert_eq!(point.action.as_deref(), Some("purchased"));
        assert_eq!(point.date.as_deref(), Some("1607"));
        assert!(point.next_location_unknown);
        assert_eq!(point.coordinate, Coordinate::new(41.9, 12.5));
    }

    #[test]
    fn test_resolve_without_location() {
        let entry = ProvenanceEntry::default().with_owner("Nobody");
        assert!(entry.resolve(Coordinate::new(0.0, 0.0)).is_none());
    }
}
