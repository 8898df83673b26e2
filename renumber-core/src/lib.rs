#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod audit;
pub mod error;
pub mod operations;
pub mod output;
pub mod preview;
pub mod rename;
pub mod scanner;
pub mod suffix;

pub use audit::{write_log, LOG_FILE_NAME, LOG_HEADER};
pub use error::{RenameError, RenumberError};
pub use operations::{plan_operation, rename_directories};
pub use output::{OutputFormat, OutputFormatter, RenameReport, VersionResult};
pub use preview::{render_plan, render_report};
pub use rename::{rename_all, target_occupied, RenameOutcome, RenameRecord};
pub use scanner::{
    ensure_directory, list_subdirectories, order_for_rename, plan_renames, PlanStatus,
    PlannedRename, RenamePlan,
};
pub use suffix::{build_new_name, extract_trailing_number, TrailingNumber};
