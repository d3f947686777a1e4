//! # Runtime Directory Bootstrap
//!
//! Wayland sessions need `XDG_RUNTIME_DIR`. On a stock BSD install nothing
//! creates one, so we use `/tmp/<euid>-runtime-dir`.
//!
//! The path is predictable, so a pre-existing entry is only trusted if it is
//! a real directory owned by us. Anything else is fatal and nothing is
//! created or changed.

use std::fmt;
use std::fs::{self, DirBuilder};
use std::io;
use std::os::unix::fs::{DirBuilderExt, MetadataExt};
use std::path::{Path, PathBuf};

use log::info;

pub const RUNTIME_DIR_ENV: &str = "XDG_RUNTIME_DIR";

#[derive(Debug)]
pub enum BootstrapError {
    Create { path: PathBuf, source: io::Error },
    Stat { path: PathBuf, source: io::Error },
    NotADirectory(PathBuf),
    Symlink(PathBuf),
    WrongOwner { path: PathBuf, owner: u32, euid: u32 },
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Create { path, source } => {
                write!(f, "failed to create runtime directory {}: {source}", path.display())
            }
            BootstrapError::Stat { path, source } => {
                write!(f, "failed to stat runtime directory {}: {source}", path.display())
            }
            BootstrapError::NotADirectory(path) => {
                write!(f, "{RUNTIME_DIR_ENV} '{}' exists but is not a directory", path.display())
            }
            BootstrapError::Symlink(path) => {
                write!(f, "{RUNTIME_DIR_ENV} '{}' is a symlink; refusing to use it", path.display())
            }
            BootstrapError::WrongOwner { path, owner, euid } => write!(
                f,
                "{RUNTIME_DIR_ENV} '{}' is owned by UID {owner}, not our UID {euid}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for BootstrapError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeDir {
    Created,
    Existing,
}

pub fn runtime_dir_path(uid: u32) -> PathBuf {
    PathBuf::from(format!("/tmp/{uid}-runtime-dir"))
}

/// Create `path` with mode 0700, or verify an existing one belongs to `euid`.
pub fn prepare_runtime_dir(path: &Path, euid: u32) -> Result<RuntimeDir, BootstrapError> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            DirBuilder::new()
                .mode(0o700)
                .create(path)
                .map_err(|source| BootstrapError::Create {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!("Created runtime directory {}", path.display());
            return Ok(RuntimeDir::Created);
        }
        Err(source) => {
            return Err(BootstrapError::Stat {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if meta.file_type().is_symlink() {
        return Err(BootstrapError::Symlink(path.to_path_buf()));
    }
    if !meta.is_dir() {
        return Err(BootstrapError::NotADirectory(path.to_path_buf()));
    }
    if meta.uid() != euid {
        return Err(BootstrapError::WrongOwner {
            path: path.to_path_buf(),
            owner: meta.uid(),
            euid,
        });
    }

    info!("Reusing runtime directory {}", path.display());
    Ok(RuntimeDir::Existing)
}

/// Prepare `/tmp/<euid>-runtime-dir` and export it as `XDG_RUNTIME_DIR`.
///
/// Must run before any other thread exists: it mutates the process
/// environment.
pub fn bootstrap_environment() -> Result<PathBuf, BootstrapError> {
    let euid = nix::unistd::geteuid().as_raw();
    let path = runtime_dir_path(euid);
    prepare_runtime_dir(&path, euid)?;

    // SAFETY: called from main before the tokio runtime or any other thread
    // is started, so nothing can read the environment concurrently.
    unsafe { std::env::set_var(RUNTIME_DIR_ENV, &path) };
    Ok(path)
}
