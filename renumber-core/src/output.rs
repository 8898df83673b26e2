use crate::error::{RenameError, RenumberError};
use crate::rename::RenameRecord;
use crate::scanner::RenamePlan;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of one rename batch
#[derive(Debug, Serialize)]
pub struct RenameReport {
    pub directory: PathBuf,
    pub prefix: String,
    /// Completed renames, in processing order
    pub records: Vec<RenameRecord>,
    /// Entries that matched but could not be renamed
    pub errors: Vec<RenameError>,
    /// Folders without a trailing number
    pub skipped: Vec<String>,
    /// Where the before/after log went, `None` when writing it failed
    pub log_path: Option<PathBuf>,
    /// Why the log could not be written. The renames above still happened.
    #[serde(skip)]
    pub log_error: Option<RenumberError>,
}

impl RenameReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && self.log_error.is_none()
    }

    /// The log failure with its cause, for display
    pub fn log_error_message(&self) -> Option<String> {
        self.log_error.as_ref().map(|err| match std::error::Error::source(err) {
            Some(source) => format!("{err}: {source}"),
            None => err.to_string(),
        })
    }
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameReport {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.is_success(),
            "operation": "rename",
            "directory": self.directory,
            "prefix": self.prefix,
            "renames": self.records,
            "skipped": self.skipped,
            "errors": self.errors,
            "log_file": self.log_path,
            "log_error": self.log_error_message(),
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        crate::preview::render_report(self, false)
    }
}

impl OutputFormatter for RenamePlan {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.conflict_count() == 0,
            "operation": "plan",
            "directory": self.directory,
            "prefix": self.prefix,
            "renames": self.entries,
            "skipped": self.skipped,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        crate::preview::render_plan(self, false)
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        write!(output, "{} {}", self.name, self.version).unwrap();
        output
    }
}
