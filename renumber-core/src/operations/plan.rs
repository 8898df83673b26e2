use crate::scanner::{plan_renames, RenamePlan};
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

/// Plan operation - previews a batch without renaming anything
pub fn plan_operation(directory: &Path, prefix: &str) -> Result<RenamePlan> {
    let plan = plan_renames(directory, prefix)
        .with_context(|| format!("Failed to plan renames in {}", directory.display()))?;

    info!(
        "Planned {} renames in {} ({} conflicts, {} skipped)",
        plan.ready_count(),
        directory.display(),
        plan.conflict_count(),
        plan.skipped.len()
    );
    Ok(plan)
}
