//! HTML document assembly

use crate::popup::popup_iframe_src;
use crate::{RenderError, RenderOptions};
use htmlize::escape_text;
use provmap_domain::{DrawingInstructions, MarkerInstruction, PathInstruction};
use serde::Serialize;

const LEAFLET_CSS: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.css";
const LEAFLET_JS: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.js";
const AWESOME_MARKERS_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css";
const AWESOME_MARKERS_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Everything the page script needs, serialized as one JSON literal
#[derive(Debug, Serialize)]
pub struct MapData {
    center: [f64; 2],
    zoom: u8,
    tiles: TileData,
    popup: PopupSize,
    markers: Vec<MarkerData>,
    paths: Vec<PathData>,
}

#[derive(Debug, Serialize)]
struct TileData {
    url: String,
    attribution: String,
}

#[derive(Debug, Serialize)]
struct PopupSize {
    width: u32,
    height: u32,
}

#[derive(Debug, Serialize)]
struct MarkerData {
    lat: f64,
    lon: f64,
    color: &'static str,
    icon: &'static str,
    tooltip: String,
    popup_src: String,
}

#[derive(Debug, Serialize)]
struct PathData {
    points: Vec<[f64; 2]>,
    color: String,
    weight: u32,
    opacity: f64,
    dash_array: Option<String>,
}

impl MapData {
    /// Collect drawable data; markers keep their render order
    pub fn new(instructions: &DrawingInstructions, options: &RenderOptions) -> Self {
        Self {
            center: [options.center.latitude, options.center.longitude],
            zoom: options.zoom,
            tiles: TileData {
                url: options.tile_layer.url.clone(),
                attribution: options.tile_layer.attribution.clone(),
            },
            popup: PopupSize {
                width: options.popup_width,
                height: options.popup_height,
            },
            markers: instructions.markers.iter().map(MarkerData::from).collect(),
            paths: instructions.paths.iter().map(PathData::from).collect(),
        }
    }

    /// Number of markers that will be drawn
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

impl From<&MarkerInstruction> for MarkerData {
    fn from(marker: &MarkerInstruction) -> Self {
        Self {
            lat: marker.position.latitude,
            lon: marker.position.longitude,
            color: marker.style.color(),
            icon: marker.style.icon(),
            tooltip: marker.tooltip.clone(),
            popup_src: popup_iframe_src(&marker.popup),
        }
    }
}

impl From<&PathInstruction> for PathData {
    fn from(path: &PathInstruction) -> Self {
        Self {
            points: path
                .vertices
                .iter()
                .map(|v| [v.latitude, v.longitude])
                .collect(),
            color: path.color.clone(),
            weight: path.weight,
            opacity: path.opacity,
            dash_array: path.dash_array.clone(),
        }
    }
}

/// JSON safe to inline inside a `<script>` element
fn script_json(data: &MapData) -> Result<String, RenderError> {
    let json = serde_json::to_string(data)?;
    Ok(json.replace("</", "<\\/").replace("<!--", "<\\!--"))
}

const SCRIPT: &str = r#"
    const map = L.map("map", { center: data.center, zoom: data.zoom });

    L.tileLayer(data.tiles.url, { attribution: data.tiles.attribution, maxZoom: 18 }).addTo(map);

    data.markers.forEach(function (m) {
        const icon = L.AwesomeMarkers.icon({
            icon: m.icon,
            prefix: "fa",
            markerColor: m.color,
            iconColor: "white",
        });
        const frame = document.createElement("iframe");
        frame.src = m.popup_src;
        frame.width = data.popup.width;
        frame.height = data.popup.height;
        frame.style.border = "none";
        L.marker([m.lat, m.lon], { icon: icon })
            .bindTooltip(m.tooltip)
            .bindPopup(frame, { maxWidth: "100%" })
            .addTo(map);
    });

    data.paths.forEach(function (p) {
        L.polyline(p.points, {
            color: p.color,
            weight: p.weight,
            opacity: p.opacity,
            dashArray: p.dash_array,
        }).addTo(map);
    });
"#;

/// Assemble the full page
pub fn document(
    data: &MapData,
    legend_html: &str,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let json = script_json(data)?;
    let title = escape_text(options.title.as_str());

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>{title}</title>
<link rel="stylesheet" href="{LEAFLET_CSS}" />
<link rel="stylesheet" href="{AWESOME_MARKERS_CSS}" />
<link rel="stylesheet" href="{FONT_AWESOME_CSS}" />
<script src="{LEAFLET_JS}"></script>
<script src="{AWESOME_MARKERS_JS}"></script>
<style>
    html, body {{ width: 100%; height: 100%; margin: 0; padding: 0; }}
    #map {{ position: absolute; top: 0; bottom: 0; right: 0; left: 0; }}
</style>
</head>
<body>
<div id="map"></div>
{legend_html}
<script>
    const data = {json};
{SCRIPT}</script>
</body>
</html>
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use provmap_domain::Legend;

    fn empty() -> DrawingInstructions {
        DrawingInstructions {
            markers: Vec::new(),
            paths: Vec::new(),
            legend: Legend {
                title: "Legend".to_string(),
                items: Vec::new(),
            },
        }
    }

    #[test]
    fn test_script_json_cannot_close_script() {
        let mut options = RenderOptions::default();
        options.tile_layer.attribution = "</script><script>alert(1)</script>".to_string();
        let data = MapData::new(&empty(), &options);

        let json = script_json(&data).unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains("<\\/script>"));
    }

    #[test]
    fn test_document_shell() {
        let options = RenderOptions::default();
        let data = MapData::new(&empty(), &options);
        let html = document(&data, "<div>legend</div>", &options).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Provenance map</title>"));
        assert!(html.contains("leaflet.awesome-markers.js"));
        assert!(html.contains("<div>legend</div>"));
        assert!(html.contains("\"center\":[20.0,0.0]"));
        assert_eq!(data.marker_count(), 0);
    }
}
