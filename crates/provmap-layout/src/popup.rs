//! Popup merging for markers that share a coordinate

use provmap_domain::{Coordinate, CoordinateKey, PopupEntry, ResolvedPoint};
use std::collections::HashMap;

/// Chronological indices grouped by exact coordinate
///
/// Built in one pass; every marker then looks up its group, so two visits to
/// the same spot show the same, fully merged popup.
#[derive(Debug, Clone, Default)]
pub struct PopupGroups {
    groups: HashMap<CoordinateKey, Vec<usize>>,
}

impl PopupGroups {
    /// Group `points` by coordinate
    pub fn build(points: &[ResolvedPoint]) -> Self {
        let mut groups: HashMap<CoordinateKey, Vec<usize>> = HashMap::new();
        for (index, point) in points.iter().enumerate() {
            groups.entry(point.coordinate.key()).or_default().push(index);
        }
        Self { groups }
    }

    /// Indices of every point at exactly `coordinate`, ascending
    pub fn members(&self, coordinate: Coordinate) -> &[usize] {
        self.groups
            .get(&coordinate.key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct coordinates
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True if no points were grouped
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Popup rows for a marker at `coordinate`
    ///
    /// `points` must be the same slice the groups were built from.
    pub fn popup_for(&self, points: &[ResolvedPoint], coordinate: Coordinate) -> Vec<PopupEntry> {
        self.members(coordinate)
            .iter()
            .map(|&index| popup_entry(index, &points[index]))
            .collect()
    }
}

fn popup_entry(index: usize, point: &ResolvedPoint) -> PopupEntry {
    PopupEntry {
        step: index + 1,
        location: point.location.clone(),
        action: point.action.as_deref().map(capitalize).unwrap_or_default(),
        owner: point.owner.clone().unwrap_or_default(),
        date: point.date.clone().unwrap_or_default(),
    }
}

/// Title-case the first character and lower-case the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = titlecase(first);
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}

/// Titlecase form of a single character
///
/// Differs from uppercase for the Latin digraphs and for characters whose
/// uppercase expands to several letters (`ß` -> `Ss`, `ﬁ` -> `Fi`).
fn titlecase(c: char) -> String {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}'.to_string(),
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}'.to_string(),
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}'.to_string(),
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}'.to_string(),
        _ => {
            let mut upper = c.to_uppercase();
            let mut out: String = upper.next().into_iter().collect();
            out.extend(upper.flat_map(char::to_lowercase));
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provmap_domain::ProvenanceEntry;

    fn point(action: &str, lat: f64, lon: f64) -> ResolvedPoint {
        ProvenanceEntry::at("somewhere")
            .with_action(action)
            .resolve(Coordinate::new(lat, lon))
            .unwrap()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("purchased"), "Purchased");
        assert_eq!(capitalize("SOLD at auction"), "Sold at auction");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_titlecases_first_character() {
        assert_eq!(capitalize("ßa"), "Ssa");
        assert_eq!(capitalize("ﬁnal"), "Final");
        assert_eq!(capitalize("ǆungla"), "ǅungla");
        assert_eq!(capitalize("ǅ"), "ǅ");
    }

    #[test]
    fn test_groups_by_exact_coordinate() {
        let points = vec![
            point("create", 1.0, 1.0),
            point("move", 2.0, 2.0),
            point("sell", 1.0, 1.0),
            point("near", 1.0, 1.000_000_1),
        ];
        let groups = PopupGroups::build(&points);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.members(Coordinate::new(1.0, 1.0)), &[0, 2]);
        assert_eq!(groups.members(Coordinate::new(1.0, 1.000_000_1)), &[3]);
        assert!(groups.members(Coordinate::new(9.0, 9.0)).is_empty());
    }

    #[test]
    fn test_popup_rows() {
        let mut points = vec![point("create", 1.0, 1.0), point("sell", 1.0, 1.0)];
        points[1].owner = Some("Z".to_string());
        let groups = PopupGroups::build(&points);

        let popup = groups.popup_for(&points, Coordinate::new(1.0, 1.0));
        assert_eq!(popup.len(), 2);
        assert_eq!(popup[0].step, 1);
        assert_eq!(popup[0].action, "Create");
        assert_eq!(popup[0].owner, "");
        assert_eq!(popup[1].step, 2);
        assert_eq!(popup[1].action, "Sell");
        assert_eq!(popup[1].owner, "Z");
    }
}
