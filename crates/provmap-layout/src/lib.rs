//! provmap Map Layout Builder
//!
//! Turns a chronologically ordered [`ResolvedPoint`] sequence into
//! [`DrawingInstructions`]: one styled marker per point, one geodesic path per
//! consecutive pair, and the static legend.
//!
//! Two orderings are kept apart throughout:
//!
//! - the **chronological index** (position in `points`) drives step numbers,
//!   endpoint styling and path construction;
//! - the **render sequence** only decides which marker is drawn on top.
//!
//! # Examples
//!
//! ```
//! use provmap_domain::{Coordinate, ProvenanceEntry};
//! use provmap_layout::{build_layout, LayoutOptions, LinearInterpolator};
//!
//! let points = vec![
//!     ProvenanceEntry::at("A").resolve(Coordinate::new(1.0, 1.0)).unwrap(),
//!     ProvenanceEntry::at("B").resolve(Coordinate::new(2.0, 2.0)).unwrap(),
//! ];
//! let layout = build_layout(&points, &LinearInterpolator, &LayoutOptions::default());
//! assert_eq!(layout.markers.len(), 2);
//! assert_eq!(layout.paths.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod geodesic;
pub mod legend;
pub mod order;
pub mod paths;
pub mod popup;

use provmap_domain::traits::GeodesicInterpolator;
use provmap_domain::{DrawingInstructions, MarkerInstruction, ResolvedPoint};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use geodesic::{GeoInterpolator, LinearInterpolator};
pub use legend::default_legend;
pub use order::{marker_style, render_sequence};
pub use paths::build_paths;
pub use popup::{capitalize, PopupGroups};

/// Number of intermediate points per path
pub const DEFAULT_INTERPOLATION_POINTS: usize = 50;

/// Path stroke color
pub const DEFAULT_PATH_COLOR: &str = "crimson";

/// Path stroke width in pixels
pub const DEFAULT_PATH_WEIGHT: u32 = 4;

/// Path stroke opacity
pub const DEFAULT_PATH_OPACITY: f64 = 0.9;

/// Dash pattern for legs with unknown provenance
pub const UNKNOWN_LEG_DASH: &str = "5,10";

/// Tunables for path drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Intermediate points per geodesic path
    pub interpolation_points: usize,

    /// Path stroke color
    pub path_color: String,

    /// Path stroke width in pixels
    pub path_weight: u32,

    /// Path stroke opacity
    pub path_opacity: f64,

    /// Dash pattern for legs leaving a point with unknown provenance
    pub unknown_dash_array: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            interpolation_points: DEFAULT_INTERPOLATION_POINTS,
            path_color: DEFAULT_PATH_COLOR.to_string(),
            path_weight: DEFAULT_PATH_WEIGHT,
            path_opacity: DEFAULT_PATH_OPACITY,
            unknown_dash_array: UNKNOWN_LEG_DASH.to_string(),
        }
    }
}

/// Build the drawing instructions for `points`
///
/// Pure: the same input always yields an equal result. An empty sequence
/// yields no markers and no paths; the legend is always present.
pub fn build_layout<I>(
    points: &[ResolvedPoint],
    interpolator: &I,
    options: &LayoutOptions,
) -> DrawingInstructions
where
    I: GeodesicInterpolator + ?Sized,
{
    let groups = PopupGroups::build(points);

    let markers: Vec<MarkerInstruction> = render_sequence(points.len())
        .into_iter()
        .enumerate()
        .map(|(draw_order, index)| {
            let point = &points[index];
            MarkerInstruction {
                chronological_index: index,
                draw_order,
                position: point.coordinate,
                style: marker_style(index, points.len()),
                popup: groups.popup_for(points, point.coordinate),
                tooltip: format!("Step {}", index + 1),
            }
        })
        .collect();

    let paths = build_paths(points, interpolator, options);

    debug!(
        markers = markers.len(),
        paths = paths.len(),
        locations = groups.len(),
        "built map layout"
    );

    DrawingInstructions {
        markers,
        paths,
        legend: default_legend(options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provmap_domain::{Coordinate, MarkerStyle, ProvenanceEntry};

    fn point(location: &str, lat: f64, lon: f64) -> ResolvedPoint {
        ProvenanceEntry::at(location)
            .resolve(Coordinate::new(lat, lon))
            .unwrap()
    }

    #[test]
    fn test_empty_sequence() {
        let layout = build_layout(&[], &LinearInterpolator, &LayoutOptions::default());
        assert!(layout.is_empty());
        assert!(!layout.legend.items.is_empty());
    }

    #[test]
    fn test_single_point_uses_first_style() {
        let points = vec![point("A", 1.0, 1.0)];
        let layout = build_layout(&points, &LinearInterpolator, &LayoutOptions::default());

        assert_eq!(layout.markers.len(), 1);
        assert!(layout.paths.is_empty());
        assert_eq!(layout.markers[0].style, MarkerStyle::First);
        assert_eq!(layout.markers[0].tooltip, "Step 1");
    }

    #[test]
    fn test_markers_carry_draw_order() {
        let points = vec![point("A", 1.0, 1.0), point("B", 2.0, 2.0), point("C", 3.0, 3.0)];
        let layout = build_layout(&points, &LinearInterpolator, &LayoutOptions::default());

        let draw_orders: Vec<_> = layout.markers.iter().map(|m| m.draw_order).collect();
        assert_eq!(draw_orders, vec![0, 1, 2]);
        let tooltips: Vec<_> = layout.markers.iter().map(|m| m.tooltip.as_str()).collect();
        assert_eq!(tooltips, vec!["Step 2", "Step 1", "Step 3"]);
    }

    #[test]
    fn test_duplicate_points_keep_their_own_index() {
        // Identical records must still get distinct step numbers
        let points = vec![point("A", 1.0, 1.0), point("A", 1.0, 1.0), point("A", 1.0, 1.0)];
        let layout = build_layout(&points, &LinearInterpolator, &LayoutOptions::default());

        let indices: Vec<_> = layout.markers.iter().map(|m| m.chronological_index).collect();
        assert_eq!(indices, vec![1, 0, 2]);
        assert_eq!(layout.markers[0].style, MarkerStyle::Intermediate);
        assert_eq!(layout.markers[2].style, MarkerStyle::Last);
    }
}
