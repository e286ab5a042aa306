//! provmap CLI library.
//!
//! Loads a provenance document, geocodes its entries, lays out the map and
//! writes `{id}_map.html`. The binary in `main.rs` is a thin wrapper around
//! [`pipeline::run`].

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use input::ProvenanceDocument;
pub use output::Formatter;
