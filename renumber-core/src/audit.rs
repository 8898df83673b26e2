use crate::error::RenumberError;
use crate::rename::RenameRecord;
use log::debug;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Name of the before/after log written into the renamed directory
pub const LOG_FILE_NAME: &str = "antes-e-depois.txt";

/// First line of the log file
pub const LOG_HEADER: &str = "Renomeações realizadas:";

/// One log line for a record, without the line break
pub fn format_record(record: &RenameRecord) -> String {
    format!("'{}' -> '{}'", record.old_name, record.new_name)
}

/// Write the header and one line per record to `writer`.
pub fn write_records<W: Write>(writer: &mut W, records: &[RenameRecord]) -> io::Result<()> {
    writeln!(writer, "{LOG_HEADER}")?;
    for record in records {
        writeln!(writer, "{}", format_record(record))?;
    }
    Ok(())
}

/// Create or truncate `directory/antes-e-depois.txt` and write `records` to it.
///
/// Returns the path of the log file.
pub fn write_log(directory: &Path, records: &[RenameRecord]) -> Result<PathBuf, RenumberError> {
    let path = directory.join(LOG_FILE_NAME);
    let to_error = |source: io::Error| RenumberError::LogWrite {
        path: path.clone(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .map_err(to_error)?;

    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(path)
}
