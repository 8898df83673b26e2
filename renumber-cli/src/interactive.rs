use anyhow::Result;
use renumber_core::{rename_directories, render_report, RenumberError};
use std::io::{BufRead, Write};
use std::path::Path;

/// Typing this at the directory prompt ends the session
pub const EXIT_KEYWORD: &str = "exit";

const DIRECTORY_PROMPT: &str = "Directory path (or 'exit' to quit): ";
const PREFIX_PROMPT: &str = "Prefix to place before the numbers (e.g. 'Chapter'): ";

/// Print `prompt` and read one trimmed line. `None` means end of input.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for a directory and a prefix, rename, repeat.
///
/// Ends on the exit keyword (any case) or end of input. A bad path or a failed
/// batch is reported and the loop carries on.
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    use_color: bool,
) -> Result<()> {
    loop {
        let Some(directory) = ask(input, out, DIRECTORY_PROMPT)? else {
            break;
        };
        if directory.eq_ignore_ascii_case(EXIT_KEYWORD) {
            break;
        }

        let Some(prefix) = ask(input, out, PREFIX_PROMPT)? else {
            break;
        };

        match rename_directories(Path::new(&directory), &prefix) {
            Ok(report) => writeln!(out, "\n{}\n", render_report(&report, use_color))?,
            Err(RenumberError::DirectoryNotFound(_)) => writeln!(
                out,
                "\nError: directory not found. Check the path and try again.\n"
            )?,
            Err(e) => writeln!(out, "\nError: {:#}\n", anyhow::Error::from(e))?,
        }
    }

    writeln!(out, "\nProgram finished!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn session(input: &str) -> String {
        let mut out = Vec::new();
        run_interactive(&mut input.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_keyword_ends_session() {
        let output = session("exit\n");
        assert!(output.contains(DIRECTORY_PROMPT));
        assert!(!output.contains(PREFIX_PROMPT));
        assert!(output.ends_with("Program finished!\n"));
    }

    #[test]
    fn test_exit_keyword_is_case_insensitive_and_trimmed() {
        let output = session("   EXIT  \n");
        assert!(output.contains("Program finished!"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let output = session("");
        assert!(output.contains("Program finished!"));
    }

    #[test]
    fn test_missing_directory_is_reported_and_loop_continues() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let output = session(&format!("{}\nPage\nexit\n", missing.display()));

        assert!(output.contains("Error: directory not found. Check the path and try again."));
        assert_eq!(output.matches(DIRECTORY_PROMPT).count(), 2);
        assert!(!missing.join("antes-e-depois.txt").exists());
    }

    #[test]
    fn test_renames_then_exits() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("img2")).unwrap();
        fs::create_dir(temp.path().join("img1")).unwrap();

        let output = session(&format!("  {}  \n  Page \nexit\n", temp.path().display()));

        assert!(output.contains("'img1' -> 'Page 1'"));
        assert!(output.contains("'img2' -> 'Page 2'"));
        assert!(temp.path().join("Page 1").is_dir());
        assert!(temp.path().join("antes-e-depois.txt").is_file());
    }

    #[test]
    fn test_mapping_is_printed_when_log_cannot_be_written() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("img1")).unwrap();
        fs::create_dir(temp.path().join("antes-e-depois.txt")).unwrap();

        let output = session(&format!("{}\nPage\nexit\n", temp.path().display()));

        assert!(output.contains("'img1' -> 'Page 1'"));
        assert!(output.contains("Failed: failed to write rename log"));
        assert!(output.contains("Program finished!"));
    }

    #[test]
    fn test_two_batches_in_one_session() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::create_dir(first.path().join("a1")).unwrap();
        fs::create_dir(second.path().join("b7")).unwrap();

        session(&format!(
            "{}\nOne\n{}\nTwo\nexit\n",
            first.path().display(),
            second.path().display()
        ));

        assert!(first.path().join("One 1").is_dir());
        assert!(second.path().join("Two 7").is_dir());
    }
}
