//! Package installation.
//!
//! Packages go in config order. Anything `pkg info` already knows about is
//! skipped. A failed install is recorded and the loop moves on, so one
//! broken package never hides the state of the rest.

use log::info;

use super::SetupContext;
use crate::core::outcome::Outcome;
use crate::runner::{Step, StepStatus};

pub fn is_installed(ctx: &SetupContext, package: &str) -> bool {
    ctx.runner
        .run("pkg", &["info".to_string(), package.to_string()])
        .success
}

pub fn install_packages(ctx: &SetupContext) -> Outcome {
    let mut lines = Vec::new();
    let mut failed: Vec<&str> = Vec::new();

    for package in &ctx.config.packages {
        if is_installed(ctx, package) {
            lines.push(format!("Already installed: {package}"));
            continue;
        }

        let step = Step::new(
            format!("Installing {package}"),
            "pkg",
            vec!["install".into(), "-y".into(), package.clone()],
        )
        .privileged(&ctx.config.escalation);

        match step.run(ctx.runner.as_ref()) {
            StepStatus::Warning(output) => {
                lines.push(format!("Failed to install {package}: {}", output.trim()));
                failed.push(package);
            }
            _ => {
                info!("Installed {}", package);
                lines.push(format!("Successfully installed {package}"));
            }
        }
    }

    if failed.is_empty() {
        return Outcome::success(lines);
    }

    lines.push(String::new());
    lines.push(format!(
        "Failed packages ({}): {}",
        failed.len(),
        failed.join(", ")
    ));
    Outcome::failure(lines, format!("{} packages failed to install", failed.len()))
}
