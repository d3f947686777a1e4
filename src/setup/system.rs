//! Host configuration: services, group membership, kernel module, profile
//! exports and a render-device probe.
//!
//! Every step runs even if an earlier one warned. The job fails if any step
//! failed for a reason other than a benign "already done" message.

use log::warn;

use super::device::{check_access, find_render_device};
use super::profile::{Export, ExportStatus, ensure_export};
use super::{SetupContext, launch_hint};
use crate::core::bootstrap::runtime_dir_path;
use crate::core::outcome::Outcome;
use crate::runner::Step;

const ALREADY_RUNNING: &[&str] = &["already running"];
const ALREADY_LOADED: &[&str] = &["already loaded", "module already loaded"];

/// The command steps, in execution order.
pub fn command_steps(ctx: &SetupContext) -> Vec<Step> {
    let config = &ctx.config;
    let sudo = config.escalation.as_str();
    let mut steps = Vec::new();

    for service in &config.services {
        steps.push(
            Step::new(
                format!("Enabling {service} service"),
                "sysrc",
                vec![format!("{service}_enable=YES")],
            )
            .privileged(sudo)
            .tolerate(ALREADY_RUNNING, "already running"),
        );
        steps.push(
            Step::new(
                format!("Starting {service} service"),
                "service",
                vec![service.clone(), "start".into()],
            )
            .privileged(sudo)
            .tolerate(ALREADY_RUNNING, "already running"),
        );
    }

    if let Some(user) = &ctx.env.user {
        steps.push(
            Step::new(
                format!("Adding user '{user}' to {} group", config.group),
                "pw",
                vec!["groupmod".into(), config.group.clone(), "-m".into(), user.clone()],
            )
            .privileged(sudo),
        );
    }

    let module = &config.kernel_module;
    steps.push(
        Step::new(
            format!("Loading {} kernel module", module.to_uppercase()),
            "kldload",
            vec![module.clone()],
        )
        .privileged(sudo)
        .tolerate(ALREADY_LOADED, "already loaded"),
    );
    steps.push(
        Step::new(
            format!("Persisting {} module to boot", module.to_uppercase()),
            "sysrc",
            vec![format!("kld_list+={module}")],
        )
        .privileged(sudo),
    );

    steps
}

pub fn setup_system(ctx: &SetupContext) -> Outcome {
    let mut lines = Vec::new();
    let mut failures = 0usize;

    // Services first, then the group step, so a missing user is reported
    // in the same place it would have run.
    let service_steps = ctx.config.services.len() * 2;
    for (index, step) in command_steps(ctx).iter().enumerate() {
        if index == service_steps && ctx.env.user.is_none() {
            warn!("No USER or LOGNAME, skipping group membership");
            lines.push("Warning: Could not determine current user for group setup".to_string());
        }
        let status = step.run(ctx.runner.as_ref());
        if status.is_failure() {
            failures += 1;
        }
        lines.push(step.log_line(&status));
    }

    failures += write_profile_exports(ctx, &mut lines);
    probe_render_device(ctx, &mut lines);

    lines.push(String::new());
    lines.push(
        "System setup complete. You may need to log out and back in for group changes to take effect."
            .to_string(),
    );
    lines.push(String::new());
    lines.extend(launch_hint(&ctx.config));

    if failures == 0 {
        Outcome::success(lines)
    } else {
        Outcome::failure(lines, format!("{failures} setup steps reported warnings"))
    }
}

fn profile_exports(ctx: &SetupContext) -> [Export; 2] {
    [
        Export {
            name: "XDG_RUNTIME_DIR",
            value: runtime_dir_path(ctx.env.euid).display().to_string(),
            comment: Some("Set XDG_RUNTIME_DIR for Wayland compositors"),
        },
        Export {
            name: "LIBSEAT_BACKEND",
            value: ctx.config.seat_backend.clone(),
            comment: None,
        },
    ]
}

/// Returns the number of exports that could not be written.
fn write_profile_exports(ctx: &SetupContext, lines: &mut Vec<String>) -> usize {
    let Some(home) = &ctx.env.home else {
        lines.push("Warning: Could not determine home directory for .profile".to_string());
        return 1;
    };
    let profile = home.join(".profile");

    let mut failures = 0;
    for export in profile_exports(ctx) {
        match ensure_export(&profile, &export) {
            Ok(ExportStatus::Added) => lines.push(format!(
                "Added {}={} to {}: OK",
                export.name,
                export.value,
                profile.display()
            )),
            Ok(ExportStatus::Present) => {
                lines.push(format!("{} already in .profile: OK", export.name))
            }
            Err(e) => {
                lines.push(format!(
                    "Warning: Could not write to {}: {}",
                    profile.display(),
                    e
                ));
                failures += 1;
            }
        }
    }
    failures
}

/// Informational only: a missing device is a warning line, not a failure.
fn probe_render_device(ctx: &SetupContext, lines: &mut Vec<String>) {
    let dir = &ctx.config.device_dir;
    match find_render_device(dir, &ctx.config.device_prefix) {
        Some(device) => {
            lines.push(format!("Found DRM render device: {}", device.display()));
            match check_access(&device) {
                Ok(()) => lines.push(format!(
                    "DRM render device {} is accessible: OK",
                    device.display()
                )),
                Err(e) => lines.push(format!(
                    "Warning: Cannot access {}: {} (check {} group membership)",
                    device.display(),
                    e,
                    ctx.config.group
                )),
            }
        }
        None => {
            lines.push(format!(
                "Warning: No DRM render device found in {}/",
                dir.display()
            ));
            lines.push(
                "  GPU drivers may not be loaded. Check that drm and your GPU kernel module are loaded."
                    .to_string(),
            );
        }
    }
}
