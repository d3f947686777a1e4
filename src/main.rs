use clap::Parser;
use niri_setup::core::bootstrap::bootstrap_environment;
use niri_setup::core::config::{self, CliOverrides};
use niri_setup::runner::SystemRunner;
use niri_setup::setup::{HostEnv, SetupContext};
use niri_setup::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "niri-setup", about = "Install and configure the Niri compositor on GhostBSD")]
struct Args {
    /// Settings file to use instead of ~/.config/niri-setup/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Template to install, skipping the config.kdl search
    #[arg(long)]
    template: Option<PathBuf>,

    /// File that "Save Logs" appends to
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write debug-level diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn diagnostics_path() -> PathBuf {
    dirs::state_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("niri-setup")
        .join("niri-setup.log")
}

fn init_logging(verbose: bool) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let path = diagnostics_path();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn fail(message: impl std::fmt::Display) -> ExitCode {
    log::error!("{message}");
    eprintln!("niri-setup: {message}");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    log::info!("niri-setup {} starting", env!("CARGO_PKG_VERSION"));

    // Runs before any other thread exists: it exports XDG_RUNTIME_DIR
    match bootstrap_environment() {
        Ok(dir) => log::info!("XDG_RUNTIME_DIR={}", dir.display()),
        Err(e) => return fail(e),
    }

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path, false),
        None => config::load_config(),
    };
    let file_config = match loaded {
        Ok(c) => c,
        Err(e) => return fail(e),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            template: args.template,
            log_file: args.log_file,
        },
    );

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => return fail(format!("failed to start async runtime: {e}")),
    };

    let ctx = SetupContext {
        runner: Arc::new(SystemRunner),
        config: Arc::new(resolved),
        env: HostEnv::detect(),
    };

    let result = {
        let _guard = runtime.enter();
        tui::run(ctx)
    };
    // Quitting is impossible while a job runs, so nothing is left to wait on
    runtime.shutdown_background();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(format!("terminal error: {e}")),
    }
}
