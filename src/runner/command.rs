use std::process::{Command, Stdio};

use log::debug;

/// Captured result of one external command.
///
/// `output` is stdout followed by stderr. It is opaque diagnostic text;
/// callers decide what a failure means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub output: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }

    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: false,
        }
    }
}

/// Runs external programs to completion.
///
/// Blocks the calling thread. Setup jobs call this from the blocking pool,
/// never from the UI loop. No retries, no timeout.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String]) -> CommandOutput;
}

/// Real runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> CommandOutput {
        debug!("exec: {} {}", program, args.join(" "));

        // stdin is detached so a child can't steal keystrokes from the TUI
        let result = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output();

        match result {
            Ok(out) => {
                let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&out.stderr));
                debug!("exit: {} -> {}", program, out.status);
                CommandOutput {
                    output: text,
                    success: out.status.success(),
                }
            }
            Err(e) => {
                debug!("spawn failed: {} ({})", program, e);
                CommandOutput::failed(format!("failed to start {program}: {e}"))
            }
        }
    }
}
