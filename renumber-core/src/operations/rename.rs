use crate::audit::write_log;
use crate::error::RenumberError;
use crate::output::RenameReport;
use crate::rename::rename_all;
use crate::scanner::{ensure_directory, list_subdirectories, order_for_rename};
use log::{info, warn};
use std::path::Path;

/// Rename every numbered folder in `directory` to `"<prefix> <number>"` and
/// write the before/after log.
///
/// Returns `DirectoryNotFound` without touching anything when `directory` is
/// not a directory. Entries that fail to rename are reported in
/// [`RenameReport::errors`]; they do not stop the batch or the log. Once
/// folders have been renamed the report is always returned, so a failed log
/// write lands in [`RenameReport::log_error`] next to the completed records.
pub fn rename_directories(directory: &Path, prefix: &str) -> Result<RenameReport, RenumberError> {
    ensure_directory(directory)?;

    let names = list_subdirectories(directory)?;
    let ordered = order_for_rename(names);
    let outcome = rename_all(directory, prefix, &ordered);
    let (log_path, log_error) = match write_log(directory, &outcome.records) {
        Ok(path) => (Some(path), None),
        Err(err) => {
            warn!("{err}");
            (None, Some(err))
        },
    };

    info!(
        "Renamed {} folders in {} ({} failed, {} skipped)",
        outcome.records.len(),
        directory.display(),
        outcome.errors.len(),
        outcome.skipped.len()
    );

    Ok(RenameReport {
        directory: directory.to_path_buf(),
        prefix: prefix.to_string(),
        records: outcome.records,
        errors: outcome.errors,
        skipped: outcome.skipped,
        log_path,
        log_error,
    })
}
