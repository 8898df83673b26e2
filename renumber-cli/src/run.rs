use anyhow::{bail, Context, Result};
use renumber_core::{rename_directories, render_report, OutputFormatter};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_run(
    directory: &Path,
    prefix: &str,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let report = rename_directories(directory, prefix)
        .with_context(|| format!("Failed to rename folders in {}", directory.display()))?;

    match output {
        OutputFormat::Json => println!("{}", report.format_json()),
        OutputFormat::Summary => println!("{}", render_report(&report, use_color)),
    }

    if let Some(message) = report.log_error_message() {
        bail!("{message}");
    }
    if !report.errors.is_empty() {
        bail!(
            "{} of {} numbered folders could not be renamed",
            report.errors.len(),
            report.errors.len() + report.records.len()
        );
    }
    Ok(())
}
