//! End-to-end map generation: document in, HTML file out.

use crate::cli::Cli;
use crate::config::{Config, GeocoderSettings, ProviderKind};
use crate::error::{CliError, Result};
use crate::input::ProvenanceDocument;
use provmap_domain::traits::{Geocoder, MapRenderer};
use provmap_domain::{Coordinate, DrawingInstructions};
use provmap_geocode::{resolve_entries, DroppedEntry, GeocodeError, GoogleGeocoder, ResolutionReport, StaticGeocoder};
use provmap_layout::{build_layout, GeoInterpolator};
use provmap_render::LeafletRenderer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// The geocoder selected by configuration.
pub enum ConfiguredGeocoder {
    /// Google Geocoding API
    Google(GoogleGeocoder),
    /// Lookup table
    Static(StaticGeocoder),
}

impl ConfiguredGeocoder {
    /// Build the geocoder for `provider`.
    pub fn from_settings(
        provider: ProviderKind,
        settings: &GeocoderSettings,
        api_key: Option<&str>,
    ) -> Result<Self> {
        match provider {
            ProviderKind::Google => {
                let api_key = api_key.ok_or_else(|| {
                    GeocodeError::MissingApiKey(provmap_geocode::google::API_KEY_ENV.to_string())
                })?;
                let geocoder = GoogleGeocoder::new(&settings.endpoint, api_key, settings.timeout())?;
                Ok(Self::Google(geocoder))
            }
            ProviderKind::Static => {
                let geocoder: StaticGeocoder = settings.static_table().collect();
                if geocoder.is_empty() {
                    return Err(CliError::Config(
                        "static provider requires at least one entry in static_locations".into(),
                    ));
                }
                Ok(Self::Static(geocoder))
            }
        }
    }
}

impl Geocoder for ConfiguredGeocoder {
    type Error = GeocodeError;

    fn geocode(&self, location: &str) -> std::result::Result<Option<Coordinate>, Self::Error> {
        match self {
            ConfiguredGeocoder::Google(geocoder) => geocoder.geocode(location),
            ConfiguredGeocoder::Static(geocoder) => geocoder.geocode(location),
        }
    }
}

/// A rendered map held in memory.
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    /// Complete HTML document
    pub html: String,

    /// Which entries survived geocoding
    pub resolution: ResolutionReport,

    /// What was drawn
    pub instructions: DrawingInstructions,
}

/// Outcome of a run, for the summary printout.
#[derive(Debug, Clone)]
pub struct MapReport {
    /// Map identifier
    pub id: String,

    /// Written file
    pub output_path: PathBuf,

    /// Entries in the input document
    pub input_entries: usize,

    /// Markers drawn
    pub markers: usize,

    /// Paths drawn
    pub paths: usize,

    /// Entries that were skipped
    pub dropped: Vec<DroppedEntry>,
}

/// Geocode, lay out and render `document` without touching the filesystem.
pub fn generate_map<G>(document: &ProvenanceDocument, geocoder: &G, config: &Config) -> Result<GeneratedMap>
where
    G: Geocoder,
    CliError: From<G::Error>,
{
    let resolution = resolve_entries(geocoder, &document.entries)?;
    let instructions = build_layout(&resolution.points, &GeoInterpolator, &config.map.layout);

    let renderer = LeafletRenderer::new(config.render_options(&format!("Provenance map {}", document.id)));
    let html = renderer.render(&instructions)?;

    Ok(GeneratedMap {
        html,
        resolution,
        instructions,
    })
}

/// Write `html` to `output_dir/file_name`, replacing any existing file.
pub fn write_map(output_dir: &Path, file_name: &str, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| CliError::io(output_dir, e))?;

    let path = output_dir.join(file_name);
    fs::write(&path, html).map_err(|e| CliError::io(&path, e))?;
    Ok(path)
}

/// Run the whole program for parsed arguments and loaded config.
pub fn run(cli: &Cli, config: &Config) -> Result<MapReport> {
    let document = ProvenanceDocument::load(&cli.input)?;
    info!(id = %document.id, entries = document.entries.len(), "loaded provenance document");

    let provider = cli.provider.map(Into::into).unwrap_or(config.geocoder.provider);
    let geocoder = ConfiguredGeocoder::from_settings(provider, &config.geocoder, cli.api_key.as_deref())?;

    run_with(cli, config, document, &geocoder)
}

/// Generate and write the map for an already loaded document.
///
/// Nothing is written unless geocoding and rendering both succeed.
pub fn run_with<G>(
    cli: &Cli,
    config: &Config,
    document: ProvenanceDocument,
    geocoder: &G,
) -> Result<MapReport>
where
    G: Geocoder,
    CliError: From<G::Error>,
{
    let generated = generate_map(&document, geocoder, config)?;

    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config.map.output_dir.clone());
    let output_path = write_map(&output_dir, &document.output_file_name(), &generated.html)?;
    info!(path = %output_path.display(), "wrote map");

    Ok(MapReport {
        id: document.id,
        output_path,
        input_entries: document.entries.len(),
        markers: generated.instructions.markers.len(),
        paths: generated.instructions.paths.len(),
        dropped: generated.resolution.dropped,
    })
}
