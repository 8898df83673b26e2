use crate::audit::format_record;
use crate::output::RenameReport;
use crate::scanner::{PlanStatus, RenamePlan};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use nu_ansi_term::{Color as AnsiColor, Style};
use std::fmt::Write;
use std::io::{self, IsTerminal};

fn paint(text: &str, style: Style, use_color: bool) -> String {
    if use_color {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

fn status_label(status: PlanStatus) -> &'static str {
    match status {
        PlanStatus::Ready => "ok",
        PlanStatus::Unchanged => "unchanged",
        PlanStatus::Conflict => "conflict",
    }
}

/// Render a plan as a table of old name, new name and status
pub fn render_plan(plan: &RenamePlan, use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Old name").fg(Color::Cyan),
            Cell::new("New name").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Old name", "New name", "Status"]);
    }

    for entry in &plan.entries {
        let mut status = Cell::new(status_label(entry.status));
        if use_color {
            status = match entry.status {
                PlanStatus::Ready => status.fg(Color::Green),
                PlanStatus::Unchanged => status.fg(Color::DarkGrey),
                PlanStatus::Conflict => status.fg(Color::Red),
            };
        }
        table.add_row(vec![
            Cell::new(&entry.old_name),
            Cell::new(&entry.new_name),
            status,
        ]);
    }

    for name in &plan.skipped {
        let mut status = Cell::new("skip");
        if use_color {
            status = status.fg(Color::DarkGrey);
        }
        table.add_row(vec![Cell::new(name), Cell::new("-"), status]);
    }

    let mut output = format!("{table}\n");
    let unchanged = plan
        .entries
        .iter()
        .filter(|e| e.status == PlanStatus::Unchanged)
        .count();
    writeln!(
        output,
        "{} to rename, {} unchanged, {} conflicts, {} skipped",
        plan.ready_count(),
        unchanged,
        plan.conflict_count(),
        plan.skipped.len()
    )
    .unwrap();
    output
}

/// Render the outcome of a batch the way the interactive shell prints it
pub fn render_report(report: &RenameReport, use_color: bool) -> String {
    let mut output = String::new();

    if report.records.is_empty() {
        writeln!(
            output,
            "No folders were renamed in {}",
            report.directory.display()
        )
        .unwrap();
    } else {
        writeln!(
            output,
            "Renamed {} folders in {}:",
            report.records.len(),
            report.directory.display()
        )
        .unwrap();
        for record in &report.records {
            let line = format_record(record);
            writeln!(output, "{}", paint(&line, AnsiColor::Green.normal(), use_color)).unwrap();
        }
    }

    if !report.skipped.is_empty() {
        let names = report.skipped.join(", ");
        let line = format!("Left unchanged (no trailing number): {names}");
        writeln!(output, "{}", paint(&line, Style::new().dimmed(), use_color)).unwrap();
    }

    for err in &report.errors {
        let line = format!("Failed: {err}");
        writeln!(output, "{}", paint(&line, AnsiColor::Red.bold(), use_color)).unwrap();
    }

    match (&report.log_path, report.log_error_message()) {
        (Some(path), _) => write!(output, "Log written to {}", path.display()).unwrap(),
        (None, Some(message)) => {
            let line = format!("Failed: {message}");
            write!(output, "{}", paint(&line, AnsiColor::Red.bold(), use_color)).unwrap();
        },
        (None, None) => output.truncate(output.trim_end().len()),
    }
    output
}
