use std::fs;
use std::path::{Path, PathBuf};

/// First entry in `dir` whose name starts with `prefix`, sorted by name.
///
/// With several GPUs this picks `renderD128` over `renderD129`, matching
/// what most compositors default to. Unreadable or missing `dir` yields
/// `None`.
pub fn find_render_device(dir: &Path, prefix: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(prefix))
        .map(|entry| dir.join(entry.file_name()))
        .min()
}

/// Whether the current user can open `device` for reading.
pub fn check_access(device: &Path) -> Result<(), std::io::Error> {
    fs::File::open(device).map(|_| ())
}
