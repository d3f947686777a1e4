use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use log::info;

use crate::core::outcome::Outcome;

/// Append `lines` to `path` under a timestamp header. Never truncates.
pub fn append_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut block = format!(
        "--- niri-setup log saved {} ---\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    for line in lines {
        block.push_str(line);
        block.push('\n');
    }
    file.write_all(block.as_bytes())
}

pub fn save_logs(path: &Path, lines: &[String]) -> Outcome {
    match append_lines(path, lines) {
        Ok(()) => {
            info!("Saved {} log lines to {}", lines.len(), path.display());
            Outcome::success(vec![format!("Logs saved to {}", path.display())])
        }
        Err(e) => Outcome::failure(
            vec![format!("Failed to write to log file {}: {e}", path.display())],
            e.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_appends_without_truncating() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nirisetup.log");
        fs::write(&path, "earlier run\n").unwrap();

        let outcome = save_logs(&path, &["Already installed: niri".to_string()]);
        assert!(outcome.is_ok());
        save_logs(&path, &["Niri configuration is valid.".to_string()]);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("earlier run\n"));
        assert_eq!(content.matches("--- niri-setup log saved").count(), 2);
        let installed = content.find("Already installed: niri").unwrap();
        let valid = content.find("Niri configuration is valid.").unwrap();
        assert!(installed < valid);
    }

    #[test]
    fn test_creates_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("fresh.log");
        let outcome = save_logs(&path, &[]);
        assert_eq!(outcome.lines, vec![format!("Logs saved to {}", path.display())]);
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_path_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("no-such-dir").join("x.log");
        let outcome = save_logs(&path, &["line".to_string()]);
        assert!(!outcome.is_ok());
    }
}
