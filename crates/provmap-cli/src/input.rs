//! Provenance document loading.

use crate::error::{CliError, Result};
use provmap_domain::ProvenanceEntry;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The input JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvenanceDocument {
    /// Map identifier; names the output file
    pub id: String,

    /// Provenance events in chronological order
    pub entries: Vec<ProvenanceEntry>,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    id: Option<RawId>,
    #[serde(default)]
    entries: Option<Vec<RawEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    next_location_unknown: Option<bool>,
}

impl From<RawEntry> for ProvenanceEntry {
    fn from(raw: RawEntry) -> Self {
        ProvenanceEntry {
            location: raw.location,
            owner: raw.owner,
            action: raw.action,
            date: raw.date,
            next_location_unknown: raw.next_location_unknown.unwrap_or(false),
        }
    }
}

impl ProvenanceDocument {
    /// Read and parse a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        Self::from_json(&contents)
    }

    /// Parse a document from a JSON string.
    pub fn from_json(contents: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(contents)?;

        let id = match raw.id {
            Some(RawId::Text(text)) => text,
            Some(RawId::Number(number)) => number.to_string(),
            None => return Err(CliError::InvalidInput("document has no \"id\"".into())),
        };
        validate_id(&id)?;

        Ok(Self {
            id,
            entries: raw
                .entries
                .unwrap_or_default()
                .into_iter()
                .map(ProvenanceEntry::from)
                .collect(),
        })
    }

    /// File name of the rendered map.
    pub fn output_file_name(&self) -> String {
        format!("{}_map.html", self.id)
    }
}

/// The id becomes part of a file name, so it must be a single plain component.
fn validate_id(id: &str) -> Result<()> {
    let invalid = id.trim().is_empty()
        || id == "."
        || id == ".."
        || id.chars().any(|c| matches!(c, '/' | '\\' | '\0'));

    if invalid {
        return Err(CliError::InvalidInput(format!(
            "id {:?} cannot be used as a file name",
            id
        )));
    }
    Ok(())
}
