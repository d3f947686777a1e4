//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.config/niri-setup/config.toml`. If missing on first
//! run, a commented-out default is generated so users can discover all options.
//!
//! The resolved value is built once at startup and never mutated afterwards.
//! Setup jobs and the TUI theme both read from it.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SetupConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub packages: PackagesConfig,
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub configure: ConfigureConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub compositor: Option<String>,
    pub title: Option<String>,
    pub escalation: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PackagesConfig {
    pub install: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SystemConfig {
    pub services: Option<Vec<String>>,
    pub group: Option<String>,
    pub kernel_module: Option<String>,
    pub device_dir: Option<String>,
    pub device_prefix: Option<String>,
    pub seat_backend: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConfigureConfig {
    pub template_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub accent: Option<String>,
    pub dim: Option<String>,
    pub log: Option<String>,
    pub error: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_COMPOSITOR: &str = "niri";
pub const DEFAULT_TITLE: &str = "Niri Setup Assistant for GhostBSD";
pub const DEFAULT_ESCALATION: &str = "sudo";
pub const DEFAULT_LOG_FILE: &str = "/tmp/nirisetup.log";
pub const DEFAULT_GROUP: &str = "video";
pub const DEFAULT_KERNEL_MODULE: &str = "drm";
pub const DEFAULT_DEVICE_DIR: &str = "/dev/dri";
pub const DEFAULT_DEVICE_PREFIX: &str = "renderD";
pub const DEFAULT_SEAT_BACKEND: &str = "consolekit2";
pub const DEFAULT_TEMPLATE_NAME: &str = "config.kdl";

pub const DEFAULT_PACKAGES: &[&str] = &[
    "drm-kmod",
    "mesa-libs",
    "mesa-dri",
    "consolekit2",
    "dbus",
    "niri",
    "xwayland-satellite",
    "seatd",
    "waybar",
    "grim",
    "jq",
    "wofi",
    "alacritty",
    "pam_xdg",
    "fuzzel",
    "swaylock",
    "foot",
    "wlsunset",
    "swaybg",
    "mako",
    "swayidle",
];

pub const DEFAULT_SERVICES: &[&str] = &["dbus", "seatd"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub compositor: String,
    pub title: String,
    /// Prefix for privileged commands. Empty runs them directly.
    pub escalation: String,
    pub log_file: PathBuf,
    pub packages: Vec<String>,
    pub services: Vec<String>,
    pub group: String,
    pub kernel_module: String,
    pub device_dir: PathBuf,
    pub device_prefix: String,
    pub seat_backend: String,
    pub template_name: String,
    /// Explicit template path from `--template`; skips the search.
    pub template_path: Option<PathBuf>,
    pub theme: ThemeConfig,
}

/// Values that only come from the command line.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub template: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.config/niri-setup/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|c| c.join("niri-setup").join("config.toml"))
}

/// Load config from the default location.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SetupConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SetupConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path, true),
        None => {
            warn!("Could not determine config directory, using default config");
            Ok(SetupConfig::default())
        }
    }
}

/// Load config from an explicit path. `generate_if_missing` controls whether
/// a commented default is written when the file is absent.
pub fn load_config_from(path: &Path, generate_if_missing: bool) -> Result<SetupConfig, ConfigError> {
    if !path.exists() {
        if generate_if_missing {
            info!("No config file found, generating default at {}", path.display());
            generate_default_config(path);
        } else {
            warn!("Config file {} not found, using defaults", path.display());
        }
        return Ok(SetupConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SetupConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# niri-setup Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# compositor = "niri"
# title = "Niri Setup Assistant for GhostBSD"
# escalation = "sudo"                # Set to "" to run privileged commands directly
# log_file = "/tmp/nirisetup.log"    # Or set NIRI_SETUP_LOG_FILE

# [packages]
# install = ["drm-kmod", "mesa-libs", "mesa-dri", "niri", "seatd"]

# [system]
# services = ["dbus", "seatd"]
# group = "video"
# kernel_module = "drm"
# device_dir = "/dev/dri"
# device_prefix = "renderD"
# seat_backend = "consolekit2"

# [configure]
# template_name = "config.kdl"       # Looked up next to the binary, then in the cwd

# [theme]
# accent = "#00ff00"                 # Names, hex, or 256-colour indices
# dim = "240"
# log = "63"
# error = "red"
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SetupConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment supplied by `env`.
pub fn resolve_with(
    config: &SetupConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // An empty compositor or log file counts as unset
    let compositor = env("NIRI_SETUP_COMPOSITOR")
        .filter(|s| !s.is_empty())
        .or_else(|| config.general.compositor.clone().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEFAULT_COMPOSITOR.to_string());

    // Escalation may legitimately be empty, so no filtering here
    let escalation = env("NIRI_SETUP_ESCALATION")
        .or_else(|| config.general.escalation.clone())
        .unwrap_or_else(|| DEFAULT_ESCALATION.to_string());

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| {
            env("NIRI_SETUP_LOG_FILE")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| {
            config
                .general
                .log_file
                .as_ref()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        compositor,
        title: config
            .general
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        escalation,
        log_file,
        packages: config
            .packages
            .install
            .clone()
            .unwrap_or_else(|| owned(DEFAULT_PACKAGES)),
        services: config
            .system
            .services
            .clone()
            .unwrap_or_else(|| owned(DEFAULT_SERVICES)),
        group: config
            .system
            .group
            .clone()
            .unwrap_or_else(|| DEFAULT_GROUP.to_string()),
        kernel_module: config
            .system
            .kernel_module
            .clone()
            .unwrap_or_else(|| DEFAULT_KERNEL_MODULE.to_string()),
        device_dir: config
            .system
            .device_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEVICE_DIR)),
        device_prefix: config
            .system
            .device_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_DEVICE_PREFIX.to_string()),
        seat_backend: config
            .system
            .seat_backend
            .clone()
            .unwrap_or_else(|| DEFAULT_SEAT_BACKEND.to_string()),
        template_name: config
            .configure
            .template_name
            .clone()
            .unwrap_or_else(|| DEFAULT_TEMPLATE_NAME.to_string()),
        template_path: cli.template.clone(),
        theme: config.theme.clone(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in defaults, ignoring the process environment.
impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&SetupConfig::default(), &CliOverrides::default(), |_| None)
    }
}

impl ResolvedConfig {
    /// Compositor name with the first letter capitalized, for user-facing text.
    pub fn display_name(&self) -> String {
        let mut chars = self.compositor.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
