use crate::error::RenameError;
use crate::suffix::{build_new_name, extract_trailing_number};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One completed rename, old name first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRecord {
    #[serde(rename = "old")]
    pub old_name: String,
    #[serde(rename = "new")]
    pub new_name: String,
}

impl RenameRecord {
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }
}

/// Everything `rename_all` did, in processing order
#[derive(Debug, Default)]
pub struct RenameOutcome {
    pub records: Vec<RenameRecord>,
    pub errors: Vec<RenameError>,
    /// Names without a trailing number. Not an error.
    pub skipped: Vec<String>,
}

/// Whether renaming `old_name` to `new_name` inside `directory` would land on
/// an existing entry.
///
/// A case-only change (`page 1` -> `Page 1`) finds the source itself on
/// case-insensitive filesystems, so for those the directory listing decides.
pub fn target_occupied(directory: &Path, old_name: &str, new_name: &str) -> bool {
    let target = directory.join(new_name);
    if fs::symlink_metadata(&target).is_err() {
        return false;
    }

    if old_name != new_name && old_name.to_lowercase() == new_name.to_lowercase() {
        return fs::read_dir(directory).map_or(true, |entries| {
            entries
                .filter_map(Result::ok)
                .any(|entry| entry.file_name() == new_name)
        });
    }

    true
}

/// Rename each name in `ordered_names` that ends in a number to
/// `"<prefix> <number>"`.
///
/// Names without a trailing number are skipped. A failed entry is recorded in
/// `errors` and the batch carries on with the next one.
pub fn rename_all(directory: &Path, prefix: &str, ordered_names: &[String]) -> RenameOutcome {
    let mut outcome = RenameOutcome::default();

    for old_name in ordered_names {
        let Some(number) = extract_trailing_number(old_name) else {
            debug!("No trailing number in '{old_name}', leaving it alone");
            outcome.skipped.push(old_name.clone());
            continue;
        };
        let new_name = build_new_name(prefix, &number);

        if new_name == *old_name {
            debug!("'{old_name}' already has its target name");
            outcome.records.push(RenameRecord::new(old_name, new_name));
            continue;
        }

        if target_occupied(directory, old_name, &new_name) {
            let err = RenameError::TargetExists {
                old_name: old_name.clone(),
                new_name,
            };
            warn!("{err}");
            outcome.errors.push(err);
            continue;
        }

        debug!("Renaming '{old_name}' to '{new_name}'");
        match fs::rename(directory.join(old_name), directory.join(&new_name)) {
            Ok(()) => outcome.records.push(RenameRecord::new(old_name, new_name)),
            Err(source) => {
                let err = RenameError::Io {
                    old_name: old_name.clone(),
                    new_name,
                    source,
                };
                warn!("{err}");
                outcome.errors.push(err);
            },
        }
    }

    outcome
}
