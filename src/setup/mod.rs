//! # Setup Jobs
//!
//! One function per menu job. Each runs its steps strictly in order through
//! the [`CommandRunner`] and folds them into a single [`Outcome`].
//!
//! Jobs never touch the UI's log buffer. Whatever they have to say travels
//! back in the returned `Outcome`.

pub mod configure;
pub mod device;
pub mod install;
pub mod profile;
pub mod save_logs;
pub mod system;
pub mod validate;

use std::path::PathBuf;
use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::menu::Job;
use crate::core::outcome::Outcome;
use crate::runner::CommandRunner;

/// Facts about the host that jobs read but never change.
#[derive(Debug, Clone)]
pub struct HostEnv {
    pub home: Option<PathBuf>,
    /// Acting user for group membership (`USER`, then `LOGNAME`).
    pub user: Option<String>,
    pub euid: u32,
    pub exe_dir: Option<PathBuf>,
    pub cwd: Option<PathBuf>,
}

impl HostEnv {
    pub fn detect() -> Self {
        let user = ["USER", "LOGNAME"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.is_empty());

        Self {
            home: dirs::home_dir(),
            user,
            euid: nix::unistd::geteuid().as_raw(),
            exe_dir: std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(PathBuf::from)),
            cwd: std::env::current_dir().ok(),
        }
    }
}

/// Everything a job needs. Cheap to clone into a blocking task.
#[derive(Clone)]
pub struct SetupContext {
    pub runner: Arc<dyn CommandRunner>,
    pub config: Arc<ResolvedConfig>,
    pub env: HostEnv,
}

pub fn run_job(job: Job, ctx: &SetupContext) -> Outcome {
    match job {
        Job::Install => install::install_packages(ctx),
        Job::SetupSystem => system::setup_system(ctx),
        Job::Configure => configure::configure(ctx),
        Job::Validate => validate::validate(ctx),
        Job::SaveLogs(lines) => save_logs::save_logs(&ctx.config.log_file, &lines),
    }
}

/// Shell hint printed after system setup and configuration.
pub(crate) fn launch_hint(config: &ResolvedConfig) -> [String; 2] {
    [
        format!(
            "To start {}, switch to a TTY (Ctrl+Alt+F2) and run:",
            config.compositor
        ),
        format!(
            "  LIBSEAT_BACKEND={} ck-launch-session dbus-launch {} --session",
            config.seat_backend, config.compositor
        ),
    ]
}
