//! # Steps
//!
//! A step is one external command plus the text shown for it. Running a
//! step always yields exactly one log line.
//!
//! ```text
//! Step ──run──▶ CommandOutput ──classify──▶ StepStatus ──▶ log line
//!                                   │
//!                      benign substrings ("already running")
//! ```

use log::warn;

use super::command::CommandRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub description: String,
    pub program: String,
    pub args: Vec<String>,
    /// Output substrings that turn a non-zero exit into success.
    pub benign: Vec<&'static str>,
    /// Label used in the log line when a benign pattern matched.
    pub benign_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Ok,
    /// Command failed but its output matched a benign pattern.
    Benign,
    /// Command failed; carries the captured output.
    Warning(String),
}

impl StepStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, StepStatus::Warning(_))
    }
}

impl Step {
    pub fn new(description: impl Into<String>, program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            description: description.into(),
            program: program.into(),
            args,
            benign: Vec::new(),
            benign_label: "",
        }
    }

    /// Wrap the command with an escalation program (e.g. `sudo`).
    /// An empty prefix leaves the command unchanged.
    pub fn privileged(mut self, escalation: &str) -> Self {
        if !escalation.is_empty() {
            let program = std::mem::replace(&mut self.program, escalation.to_string());
            self.args.insert(0, program);
        }
        self
    }

    pub fn tolerate(mut self, patterns: &[&'static str], label: &'static str) -> Self {
        self.benign.extend_from_slice(patterns);
        self.benign_label = label;
        self
    }

    pub fn run(&self, runner: &dyn CommandRunner) -> StepStatus {
        let out = runner.run(&self.program, &self.args);
        if out.success {
            StepStatus::Ok
        } else if self.benign.iter().any(|p| out.output.contains(p)) {
            StepStatus::Benign
        } else {
            warn!("{} failed: {}", self.description, out.output.trim());
            StepStatus::Warning(out.output)
        }
    }

    pub fn log_line(&self, status: &StepStatus) -> String {
        match status {
            StepStatus::Ok => format!("{}: OK", self.description),
            StepStatus::Benign => format!("{}: {}", self.description, self.benign_label),
            StepStatus::Warning(output) => {
                format!("Warning: {}: {}", self.description, output.trim())
            }
        }
    }
}
