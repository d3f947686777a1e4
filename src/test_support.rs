//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::runner::{CommandOutput, CommandRunner};
use crate::setup::{HostEnv, SetupContext};

/// A runner that answers from a script keyed by the full command line
/// (`"sudo pkg install -y niri"`). Unscripted commands get the fallback.
pub struct ScriptedRunner {
    responses: HashMap<String, CommandOutput>,
    fallback: CommandOutput,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            fallback: CommandOutput::ok(""),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn on(mut self, command_line: &str, output: CommandOutput) -> Self {
        self.responses.insert(command_line.to_string(), output);
        self
    }

    pub fn fallback(mut self, output: CommandOutput) -> Self {
        self.fallback = output;
        self
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> CommandOutput {
        let line = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.lock().unwrap().push(line.clone());
        self.responses
            .get(&line)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Config whose filesystem paths all live under `root`.
pub fn test_config(root: &Path) -> ResolvedConfig {
    ResolvedConfig {
        log_file: root.join("nirisetup.log"),
        device_dir: root.join("dri"),
        ..ResolvedConfig::default()
    }
}

/// Host environment rooted in a scratch directory.
pub fn test_env(root: &Path) -> HostEnv {
    HostEnv {
        home: Some(root.join("home")),
        user: Some("alice".to_string()),
        euid: 1001,
        exe_dir: Some(root.join("bin")),
        cwd: Some(root.join("cwd")),
    }
}

pub fn test_context(root: &Path, runner: Arc<ScriptedRunner>) -> SetupContext {
    SetupContext {
        runner,
        config: Arc::new(test_config(root)),
        env: test_env(root),
    }
}

/// Creates an App with the default menu.
pub fn test_app() -> App {
    App::new("Niri")
}
