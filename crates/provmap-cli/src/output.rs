//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::pipeline::MapReport;
use colored::*;
use provmap_geocode::DropReason;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the summary of a finished run.
    pub fn format_report(&self, report: &MapReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Text => Ok(self.format_report_text(report)),
            OutputFormat::Quiet => Ok(report.output_path.display().to_string()),
        }
    }

    fn format_report_json(&self, report: &MapReport) -> Result<String> {
        let dropped: Vec<serde_json::Value> = report
            .dropped
            .iter()
            .map(|d| {
                serde_json::json!({
                    "index": d.index,
                    "location": d.location,
                    "reason": reason_label(d.reason),
                })
            })
            .collect();

        let json = serde_json::json!({
            "id": report.id,
            "output": report.output_path.display().to_string(),
            "entries": report.input_entries,
            "markers": report.markers,
            "paths": report.paths,
            "dropped": dropped,
        });

        Ok(serde_json::to_string_pretty(&json)?)
    }

    fn format_report_text(&self, report: &MapReport) -> String {
        let mut lines = vec![self.success(&format!(
            "Wrote {} ({} marker(s), {} path(s))",
            report.output_path.display(),
            report.markers,
            report.paths
        ))];

        if report.markers == 0 {
            lines.push(self.warning("No entries could be placed on the map"));
        }

        for dropped in &report.dropped {
            let location = dropped.location.as_deref().unwrap_or("-");
            lines.push(self.warning(&format!(
                "Skipped entry {} ({}): {}",
                dropped.index + 1,
                location,
                reason_label(dropped.reason)
            )));
        }

        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn reason_label(reason: DropReason) -> &'static str {
    match reason {
        DropReason::MissingLocation => "no location",
        DropReason::NotFound => "location not found",
    }
}
