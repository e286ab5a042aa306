//! Static legend overlay

use crate::LayoutOptions;
use provmap_domain::{Legend, LegendItem, LegendSwatch};

/// Fill color of the first-location marker in awesome-markers
pub const FIRST_MARKER_FILL: &str = "#72B026";

/// Fill color of the last-location marker in awesome-markers
pub const LAST_MARKER_FILL: &str = "#D252B9";

/// Dash pattern used for the legend's sample line
const LEGEND_DASH: &str = "6,6";

/// The legend explaining path and marker styles
pub fn default_legend(options: &LayoutOptions) -> Legend {
    let line = |dash_array: Option<&str>, label: &str| LegendItem {
        swatch: LegendSwatch::Line {
            color: options.path_color.clone(),
            dash_array: dash_array.map(str::to_string),
        },
        label: label.to_string(),
    };
    let circle = |fill: &str, label: &str| LegendItem {
        swatch: LegendSwatch::Circle {
            fill: fill.to_string(),
        },
        label: label.to_string(),
    };

    Legend {
        title: "Legend".to_string(),
        items: vec![
            line(None, "Solid Line: Documented provenance"),
            line(Some(LEGEND_DASH), "Dotted Line: Unknown provenance"),
            circle(FIRST_MARKER_FILL, "First known location"),
            circle(LAST_MARKER_FILL, "Last known location"),
        ],
    }
}
