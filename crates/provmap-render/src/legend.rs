//! Legend overlay markup

use htmlize::escape_text;
use provmap_domain::{Legend, LegendSwatch};

const LEGEND_STYLE: &str = "position: fixed; bottom: 20px; left: 20px; z-index: 9999; \
background-color: white; border: 2px solid gray; padding: 10px; font-size: 14px; \
box-shadow: 2px 2px 5px rgba(0,0,0,0.3);";

/// Fixed-position HTML block for the legend
pub fn legend_html(legend: &Legend) -> String {
    let mut html = format!(
        "<div class=\"provmap-legend\" style=\"{LEGEND_STYLE}\">\n    <b>{}</b><br>\n",
        escape_text(legend.title.as_str())
    );

    for item in &legend.items {
        html.push_str("    ");
        html.push_str(&swatch_svg(&item.swatch));
        html.push_str(&format!(" {}<br>\n", escape_text(item.label.as_str())));
    }

    html.push_str("</div>");
    html
}

fn swatch_svg(swatch: &LegendSwatch) -> String {
    match swatch {
        LegendSwatch::Line { color, dash_array } => {
            let dash = dash_array
                .as_ref()
                .map(|d| format!(";stroke-dasharray:{d}"))
                .unwrap_or_default();
            format!(
                "<svg height=\"10\" width=\"40\"><line x1=\"0\" y1=\"5\" x2=\"40\" y2=\"5\" \
                 style=\"stroke:{color};stroke-width:3{dash}\" /></svg>"
            )
        }
        LegendSwatch::Circle { fill } => format!(
            "<svg width=\"12\" height=\"12\" style=\"margin-right:4px;\">\
             <circle cx=\"6\" cy=\"6\" r=\"5\" fill=\"{fill}\" stroke=\"black\" stroke-width=\"1\"/></svg>"
        ),
    }
}
