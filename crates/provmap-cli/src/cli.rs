//! Command-line argument parsing.

use crate::config::{OutputFormat, ProviderKind};
use clap::Parser;
use std::path::PathBuf;

/// Render a provenance record as an interactive HTML map.
#[derive(Debug, Parser)]
#[command(name = "provmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Provenance JSON document
    #[arg(short, long, default_value = "provenance_import.json")]
    pub input: PathBuf,

    /// Directory the map is written to (overrides config)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "PROVMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Geocoding provider (overrides config)
    #[arg(long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// Google Geocoding API key
    #[arg(long, env = "GOOGLE_GEOLOCATOR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Summary format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Geocoding provider options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProviderArg {
    /// Google Geocoding API
    Google,
    /// Lookup table from the config file
    Static,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Google => ProviderKind::Google,
            ProviderArg::Static => ProviderKind::Static,
        }
    }
}

/// Summary format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
    /// Output path only
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}
