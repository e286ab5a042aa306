//! provmap HTML Renderer
//!
//! Serializes [`DrawingInstructions`] into one self-contained Leaflet page.
//! Leaflet, Leaflet.awesome-markers and Font Awesome are loaded from CDNs;
//! all map data is embedded in the page as a JSON literal.

#![warn(missing_docs)]

pub mod legend;
pub mod page;
pub mod popup;

use provmap_domain::traits::MapRenderer;
use provmap_domain::{Coordinate, DrawingInstructions};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Stadia Stamen Terrain raster tiles
pub const DEFAULT_TILE_URL: &str =
    "https://tiles.stadiamaps.com/tiles/stamen_terrain/{z}/{x}/{y}{r}.png";

/// Attribution required by the default tile layer
pub const DEFAULT_TILE_ATTRIBUTION: &str = concat!(
    "&copy; <a href=\"https://www.stadiamaps.com/\" target=\"_blank\">Stadia Maps</a> ",
    "&copy; <a href=\"https://www.stamen.com/\" target=\"_blank\">Stamen Design</a> ",
    "&copy; <a href=\"https://openmaptiles.org/\" target=\"_blank\">OpenMapTiles</a> ",
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\" target=\"_blank\">OpenStreetMap</a> contributors"
);

/// Errors that can occur while rendering
#[derive(Error, Debug)]
pub enum RenderError {
    /// Map data could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Options are unusable
    #[error("Invalid render options: {0}")]
    InvalidOptions(String),
}

/// Background raster tiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    /// URL template with `{z}`, `{x}`, `{y}` (and optionally `{r}`) placeholders
    pub url: String,

    /// Attribution HTML shown in the map corner
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
        }
    }
}

/// Page-level rendering settings
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Document title
    pub title: String,

    /// Background tiles
    pub tile_layer: TileLayer,

    /// Initial map center
    pub center: Coordinate,

    /// Initial zoom level
    pub zoom: u8,

    /// Popup iframe width in pixels
    pub popup_width: u32,

    /// Popup iframe height in pixels
    pub popup_height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Provenance map".to_string(),
            tile_layer: TileLayer::default(),
            center: Coordinate::new(20.0, 0.0),
            zoom: 2,
            popup_width: 200,
            popup_height: 100,
        }
    }
}

impl RenderOptions {
    /// Validate the options
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.tile_layer.url.trim().is_empty() {
            return Err(RenderError::InvalidOptions("tile URL must not be empty".to_string()));
        }
        if self.popup_width == 0 || self.popup_height == 0 {
            return Err(RenderError::InvalidOptions(
                "popup dimensions must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Leaflet page renderer
#[derive(Debug, Clone, Default)]
pub struct LeafletRenderer {
    options: RenderOptions,
}

impl LeafletRenderer {
    /// Create a renderer with the given options
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The options this renderer uses
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl MapRenderer for LeafletRenderer {
    type Error = RenderError;

    fn render(&self, instructions: &DrawingInstructions) -> Result<String, Self::Error> {
        render_html(instructions, &self.options)
    }
}

/// Render `instructions` into a complete HTML document
pub fn render_html(
    instructions: &DrawingInstructions,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    options.validate()?;

    let data = page::MapData::new(instructions, options);
    let html = page::document(&data, &legend::legend_html(&instructions.legend), options)?;

    debug!(
        markers = instructions.markers.len(),
        paths = instructions.paths.len(),
        bytes = html.len(),
        "rendered map document"
    );

    Ok(html)
}
