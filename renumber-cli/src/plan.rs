use anyhow::Result;
use renumber_core::{plan_operation, render_plan, OutputFormatter};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_plan(
    directory: &Path,
    prefix: &str,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let plan = plan_operation(directory, prefix)?;

    match output {
        OutputFormat::Json => println!("{}", plan.format_json()),
        OutputFormat::Summary => print!("{}", render_plan(&plan, use_color)),
    }
    Ok(())
}
