//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use provmap_domain::Coordinate;
use provmap_geocode::google::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use provmap_layout::LayoutOptions;
use provmap_render::{RenderOptions, TileLayer, DEFAULT_TILE_ATTRIBUTION, DEFAULT_TILE_URL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Geocoding provider settings
    #[serde(default)]
    pub geocoder: GeocoderSettings,

    /// Map output settings
    #[serde(default)]
    pub map: MapSettings,

    /// Console output settings
    #[serde(default)]
    pub settings: Settings,
}

/// Which geocoder resolves locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Geocoding API
    Google,
    /// The `static_locations` table
    Static,
}

/// Geocoding provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderSettings {
    /// Provider to use
    #[serde(default = "default_provider")]
    pub provider: ProviderKind,

    /// Google API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Location text to `[latitude, longitude]`, for the static provider
    #[serde(default)]
    pub static_locations: BTreeMap<String, [f64; 2]>,
}

/// Map output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSettings {
    /// Directory the HTML file is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Tile URL template
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Tile attribution HTML
    #[serde(default = "default_tile_attribution")]
    pub tile_attribution: String,

    /// Path styling and interpolation
    #[serde(default)]
    pub layout: LayoutOptions,
}

/// Console output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default summary format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Summary format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// Output path only
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".provmap").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// if present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let geocoder = &self.geocoder;
        if geocoder.timeout_secs == 0 {
            return Err(CliError::Config("timeout_secs must be greater than 0".into()));
        }
        if geocoder.endpoint.trim().is_empty() {
            return Err(CliError::Config("endpoint must not be empty".into()));
        }
        for (location, [lat, lon]) in &geocoder.static_locations {
            let in_range = (-90.0..=90.0).contains(lat) && (-180.0..=180.0).contains(lon);
            if !in_range {
                return Err(CliError::Config(format!(
                    "static_locations entry {:?} has invalid coordinate [{}, {}]",
                    location, lat, lon
                )));
            }
        }
        if self.map.tile_url.trim().is_empty() {
            return Err(CliError::Config("tile_url must not be empty".into()));
        }
        Ok(())
    }

    /// Rendering options derived from the map settings.
    pub fn render_options(&self, title: &str) -> RenderOptions {
        RenderOptions {
            title: title.to_string(),
            tile_layer: TileLayer {
                url: self.map.tile_url.clone(),
                attribution: self.map.tile_attribution.clone(),
            },
            ..RenderOptions::default()
        }
    }
}

impl GeocoderSettings {
    /// Request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The static table as coordinates.
    pub fn static_table(&self) -> impl Iterator<Item = (String, Coordinate)> + '_ {
        self.static_locations
            .iter()
            .map(|(location, [lat, lon])| (location.clone(), Coordinate::new(*lat, *lon)))
    }
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            static_locations: BTreeMap::new(),
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            tile_url: default_tile_url(),
            tile_attribution: default_tile_attribution(),
            layout: LayoutOptions::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

fn default_provider() -> ProviderKind {
    ProviderKind::Google
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_tile_url() -> String {
    DEFAULT_TILE_URL.to_string()
}

fn default_tile_attribution() -> String {
    DEFAULT_TILE_ATTRIBUTION.to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}
