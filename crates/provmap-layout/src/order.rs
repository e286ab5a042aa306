//! Marker styling and draw order

use provmap_domain::MarkerStyle;

/// Style for the point at chronological `index` in a sequence of `len`
///
/// The first point wins over the last, so a single point is styled `First`.
pub fn marker_style(index: usize, len: usize) -> MarkerStyle {
    if index == 0 {
        MarkerStyle::First
    } else if index + 1 == len {
        MarkerStyle::Last
    } else {
        MarkerStyle::Intermediate
    }
}

/// Chronological indices in the order markers are drawn
///
/// Interior points come first in their original order, then the first point,
/// then the last point, so the two endpoints end up on top of anything
/// sharing their coordinates.
pub fn render_sequence(len: usize) -> Vec<usize> {
    match len {
        0 => Vec::new(),
        1 => vec![0],
        _ => (1..len - 1).chain([0, len - 1]).collect(),
    }
}
