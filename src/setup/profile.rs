//! `~/.profile` exports.
//!
//! Each export is keyed by its variable name. If the name already appears
//! anywhere in the file the export is left alone, so running setup twice
//! never duplicates a line.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub name: &'static str,
    pub value: String,
    /// Comment written on the line above, if any.
    pub comment: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Added,
    Present,
}

/// Append `export` to `profile` unless its name is already mentioned.
/// Creates the file if needed.
pub fn ensure_export(profile: &Path, export: &Export) -> io::Result<ExportStatus> {
    let existing = match fs::read_to_string(profile) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };
    if existing.contains(export.name) {
        return Ok(ExportStatus::Present);
    }

    let mut block = String::new();
    if let Some(comment) = export.comment {
        block.push_str(&format!("\n# {comment}\n"));
    }
    block.push_str(&format!("export {}={}\n", export.name, export.value));

    let mut file = OpenOptions::new().create(true).append(true).open(profile)?;
    file.write_all(block.as_bytes())?;
    Ok(ExportStatus::Added)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime_export() -> Export {
        Export {
            name: "XDG_RUNTIME_DIR",
            value: "/tmp/1001-runtime-dir".to_string(),
            comment: Some("Set XDG_RUNTIME_DIR for Wayland compositors"),
        }
    }

    #[test]
    fn test_appends_once() {
        let tmp = tempfile::tempdir().unwrap();
        let profile = tmp.path().join(".profile");
        fs::write(&profile, "PATH=$PATH:~/bin\n").unwrap();

        assert_eq!(ensure_export(&profile, &runtime_export()).unwrap(), ExportStatus::Added);
        assert_eq!(ensure_export(&profile, &runtime_export()).unwrap(), ExportStatus::Present);

        let content = fs::read_to_string(&profile).unwrap();
        assert!(content.starts_with("PATH=$PATH:~/bin\n"));
        assert_eq!(
            content.matches("export XDG_RUNTIME_DIR=/tmp/1001-runtime-dir").count(),
            1
        );
        assert!(content.contains("# Set XDG_RUNTIME_DIR for Wayland compositors\n"));
    }

    #[test]
    fn test_creates_missing_profile() {
        let tmp = tempfile::tempdir().unwrap();
        let profile = tmp.path().join(".profile");
        let export = Export {
            name: "LIBSEAT_BACKEND",
            value: "consolekit2".to_string(),
            comment: None,
        };
        assert_eq!(ensure_export(&profile, &export).unwrap(), ExportStatus::Added);
        assert_eq!(
            fs::read_to_string(&profile).unwrap(),
            "export LIBSEAT_BACKEND=consolekit2\n"
        );
    }

    #[test]
    fn test_existing_mention_counts_as_present() {
        let tmp = tempfile::tempdir().unwrap();
        let profile = tmp.path().join(".profile");
        fs::write(&profile, "export XDG_RUNTIME_DIR=/var/run/user/1001\n").unwrap();
        assert_eq!(
            ensure_export(&profile, &runtime_export()).unwrap(),
            ExportStatus::Present
        );
    }
}
