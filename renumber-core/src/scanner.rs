use crate::error::RenumberError;
use crate::rename::target_occupied;
use crate::suffix::{build_new_name, extract_trailing_number, TrailingNumber};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Fail with `DirectoryNotFound` unless `directory` is an existing directory.
pub fn ensure_directory(directory: &Path) -> Result<(), RenumberError> {
    if directory.is_dir() {
        Ok(())
    } else {
        Err(RenumberError::DirectoryNotFound(directory.to_path_buf()))
    }
}

/// Names of the immediate subdirectories of `directory`, in the order the
/// filesystem returns them.
///
/// Symlinks pointing at directories count as directories. Plain files are
/// ignored, and so are names that are not valid UTF-8.
pub fn list_subdirectories(directory: &Path) -> Result<Vec<String>, RenumberError> {
    let mut names = Vec::new();

    // Links are not followed by the walk itself, so a link back to
    // `directory` or an ancestor is listed instead of tripping loop detection
    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                return Err(RenumberError::ListFailed {
                    path: directory.to_path_buf(),
                    source,
                });
            },
            Err(err) => {
                // Entries that vanished mid-walk
                warn!("Skipping unreadable entry in {}: {err}", directory.display());
                continue;
            },
        };

        // `Path::is_dir` follows symlinks, dangling ones read as not a folder
        if !entry.path().is_dir() {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => warn!(
                "Skipping folder with a non UTF-8 name: {}",
                entry.path().display()
            ),
        }
    }

    debug!("Found {} folders in {}", names.len(), directory.display());
    Ok(names)
}

/// Sort names by their trailing number, ascending. Names without one go last.
///
/// The sort is stable: equal numbers and unnumbered names keep the order they
/// came in.
pub fn order_for_rename(mut names: Vec<String>) -> Vec<String> {
    names.sort_by_cached_key(|name| {
        let number = extract_trailing_number(name);
        (number.is_none(), number)
    });
    names
}

/// What applying a planned rename would do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// The folder will be renamed
    Ready,
    /// The folder already carries its target name
    Unchanged,
    /// The target name is taken, so this entry would fail
    Conflict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedRename {
    #[serde(rename = "old")]
    pub old_name: String,
    #[serde(rename = "new")]
    pub new_name: String,
    pub number: TrailingNumber,
    pub status: PlanStatus,
}

/// Ordered preview of a batch. Building one never touches the filesystem
/// beyond reading it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePlan {
    pub directory: PathBuf,
    pub prefix: String,
    pub entries: Vec<PlannedRename>,
    /// Folders with no trailing number, left as they are
    pub skipped: Vec<String>,
}

impl RenamePlan {
    pub fn ready_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == PlanStatus::Ready)
            .count()
    }

    pub fn conflict_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == PlanStatus::Conflict)
            .count()
    }
}

/// Work out every rename a batch would perform, in processing order.
///
/// A name claimed earlier in the batch is a conflict for later entries,
/// mirroring what applying the batch does.
pub fn plan_renames(directory: &Path, prefix: &str) -> Result<RenamePlan, RenumberError> {
    ensure_directory(directory)?;
    let ordered = order_for_rename(list_subdirectories(directory)?);

    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    let mut claimed: HashSet<String> = HashSet::new();

    for old_name in ordered {
        let Some(number) = extract_trailing_number(&old_name) else {
            skipped.push(old_name);
            continue;
        };
        let new_name = build_new_name(prefix, &number);

        let status = if claimed.contains(&new_name) {
            PlanStatus::Conflict
        } else if new_name == old_name {
            PlanStatus::Unchanged
        } else if target_occupied(directory, &old_name, &new_name) {
            PlanStatus::Conflict
        } else {
            PlanStatus::Ready
        };

        if status != PlanStatus::Conflict {
            claimed.insert(new_name.clone());
        }

        entries.push(PlannedRename {
            old_name,
            new_name,
            number,
            status,
        });
    }

    Ok(RenamePlan {
        directory: directory.to_path_buf(),
        prefix: prefix.to_string(),
        entries,
        skipped,
    })
}
