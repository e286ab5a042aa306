//! Drawing instructions handed to a map renderer
//!
//! Everything here is produced once by the layout builder and never mutated.

use crate::Coordinate;

/// Visual role of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerStyle {
    /// First known location
    First,
    /// Any point between the first and the last
    Intermediate,
    /// Last known location
    Last,
}

impl MarkerStyle {
    /// Marker color name understood by awesome-markers
    pub fn color(&self) -> &'static str {
        match self {
            MarkerStyle::First => "green",
            MarkerStyle::Intermediate => "blue",
            MarkerStyle::Last => "purple",
        }
    }

    /// Font Awesome icon name
    pub fn icon(&self) -> &'static str {
        match self {
            MarkerStyle::First => "location-dot",
            MarkerStyle::Intermediate => "location-pin",
            MarkerStyle::Last => "flag",
        }
    }
}

/// One event listed in a marker popup
#[derive(Debug, Clone, PartialEq)]
pub struct PopupEntry {
    /// 1-based step number in the chronological sequence
    pub step: usize,

    /// Location text
    pub location: String,

    /// Action with its first letter capitalized
    pub action: String,

    /// Owner, empty when unknown
    pub owner: String,

    /// Date, empty when unknown
    pub date: String,
}

/// A marker to draw
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerInstruction {
    /// Chronological index of the point this marker represents
    pub chronological_index: usize,

    /// Position in the render sequence; higher draws on top
    pub draw_order: usize,

    /// Where to place the marker
    pub position: Coordinate,

    /// Icon styling
    pub style: MarkerStyle,

    /// Every event at exactly this position, in chronological order
    pub popup: Vec<PopupEntry>,

    /// Hover text
    pub tooltip: String,
}

/// A polyline connecting two consecutive points
#[derive(Debug, Clone, PartialEq)]
pub struct PathInstruction {
    /// Chronological index of the origin point
    pub from_index: usize,

    /// Chronological index of the destination point
    pub to_index: usize,

    /// Ordered vertices, starting and ending exactly on the two markers
    pub vertices: Vec<Coordinate>,

    /// Stroke color
    pub color: String,

    /// Stroke width in pixels
    pub weight: u32,

    /// Stroke opacity in `0.0..=1.0`
    pub opacity: f64,

    /// SVG dash pattern, `None` for a solid line
    pub dash_array: Option<String>,
}

impl PathInstruction {
    /// Whether this path is drawn dashed
    pub fn is_dashed(&self) -> bool {
        self.dash_array.is_some()
    }
}

/// Swatch shown next to a legend label
#[derive(Debug, Clone, PartialEq)]
pub enum LegendSwatch {
    /// A horizontal line sample
    Line {
        /// Stroke color
        color: String,
        /// SVG dash pattern, if any
        dash_array: Option<String>,
    },
    /// A filled circle sample
    Circle {
        /// Fill color (CSS)
        fill: String,
    },
}

/// One row of the legend
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    /// Sample graphic
    pub swatch: LegendSwatch,

    /// Description text
    pub label: String,
}

/// Static legend overlay
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    /// Heading text
    pub title: String,

    /// Rows, top to bottom
    pub items: Vec<LegendItem>,
}

/// The full output of the layout stage
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingInstructions {
    /// Markers in render order (last element is drawn on top)
    pub markers: Vec<MarkerInstruction>,

    /// Paths in chronological order
    pub paths: Vec<PathInstruction>,

    /// Legend overlay
    pub legend: Legend,
}

impl DrawingInstructions {
    /// True when there is nothing to draw besides the legend
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_style_palette() {
        assert_eq!(MarkerStyle::First.color(), "green");
        assert_eq!(MarkerStyle::Intermediate.color(), "blue");
        assert_eq!(MarkerStyle::Last.color(), "purple");
        assert_eq!(MarkerStyle::Last.icon(), "flag");
    }
}
