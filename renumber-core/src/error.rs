use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a whole batch before or after the renames run.
#[derive(Debug, Error)]
pub enum RenumberError {
    /// The supplied path is missing or is not a directory. Nothing was touched.
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("failed to list directory {}", path.display())]
    ListFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write rename log {}", path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A single entry that could not be renamed. The rest of the batch still runs.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("cannot rename '{old_name}' to '{new_name}': target already exists")]
    TargetExists { old_name: String, new_name: String },

    #[error("cannot rename '{old_name}' to '{new_name}': {source}")]
    Io {
        old_name: String,
        new_name: String,
        #[source]
        source: io::Error,
    },
}

impl RenameError {
    pub fn old_name(&self) -> &str {
        match self {
            Self::TargetExists { old_name, .. } | Self::Io { old_name, .. } => old_name,
        }
    }

    pub fn new_name(&self) -> &str {
        match self {
            Self::TargetExists { new_name, .. } | Self::Io { new_name, .. } => new_name,
        }
    }

    /// Short machine-readable tag used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TargetExists { .. } => "target_exists",
            Self::Io { .. } => "io",
        }
    }
}

impl Serialize for RenameError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("RenameError", 4)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("old", self.old_name())?;
        state.serialize_field("new", self.new_name())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
