//! Entry filtering: raw provenance entries in, resolved points out

use provmap_domain::traits::Geocoder;
use provmap_domain::{ProvenanceEntry, ResolvedPoint};
use tracing::{debug, info, warn};

/// Why an entry did not make it into the resolved sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// No location, or only whitespace
    MissingLocation,
    /// The geocoder found no usable coordinate
    NotFound,
}

/// An input entry that was skipped
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedEntry {
    /// Position in the input entries
    pub index: usize,

    /// Location text, if there was any
    pub location: Option<String>,

    /// Reason for dropping
    pub reason: DropReason,
}

/// Outcome of resolving a list of entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionReport {
    /// Surviving entries, in input order
    pub points: Vec<ResolvedPoint>,

    /// Skipped entries, in input order
    pub dropped: Vec<DroppedEntry>,
}

impl ResolutionReport {
    /// Number of entries that went in
    pub fn input_count(&self) -> usize {
        self.points.len() + self.dropped.len()
    }
}

/// Geocode `entries` in order, keeping only those that resolve
///
/// One geocoder call is made per entry with a non-blank location, strictly
/// sequentially. Missing locations and not-found results are skipped;
/// provider failures abort and are returned as-is.
pub fn resolve_entries<G: Geocoder>(
    geocoder: &G,
    entries: &[ProvenanceEntry],
) -> Result<ResolutionReport, G::Error> {
    let mut report = ResolutionReport::default();

    for (index, entry) in entries.iter().enumerate() {
        let Some(location) = entry.geocodable_location() else {
            debug!(index, "skipping entry without location");
            report.dropped.push(DroppedEntry {
                index,
                location: entry.location.clone(),
                reason: DropReason::MissingLocation,
            });
            continue;
        };

        match geocoder.geocode(location)? {
            Some(coordinate) => {
                if let Some(point) = entry.resolve(coordinate) {
                    report.points.push(point);
                }
            }
            None => {
                warn!(index, location, "location could not be geocoded, skipping");
                report.dropped.push(DroppedEntry {
                    index,
                    location: Some(location.to_string()),
                    reason: DropReason::NotFound,
                });
            }
        }
    }

    info!(
        resolved = report.points.len(),
        dropped = report.dropped.len(),
        "resolved provenance entries"
    );

    Ok(report)
}
