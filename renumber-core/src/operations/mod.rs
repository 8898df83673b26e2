//! High-level operations that correspond to CLI commands
//!
//! These return structured results and never print, so the interactive shell
//! and the one-shot commands can render them however they like.

pub mod plan;
pub mod rename;

pub use plan::plan_operation;
pub use rename::rename_directories;
