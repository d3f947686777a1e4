//! Install the compositor config from a template.
//!
//! The destination is always overwritten with the template (plus, at most,
//! a render-device block). There is no merge and no backup.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::device::find_render_device;
use super::{SetupContext, launch_hint};
use crate::core::outcome::Outcome;

const RENDER_DEVICE_KEY: &str = "render-drm-device";

/// Template locations in priority order: `--template`, next to the
/// executable, then the working directory.
pub fn template_candidates(ctx: &SetupContext) -> Vec<PathBuf> {
    let name = &ctx.config.template_name;
    ctx.config
        .template_path
        .iter()
        .cloned()
        .chain(ctx.env.exe_dir.iter().map(|dir| dir.join(name)))
        .chain(ctx.env.cwd.iter().map(|dir| dir.join(name)))
        .collect()
}

pub fn find_template(ctx: &SetupContext) -> Option<PathBuf> {
    template_candidates(ctx).into_iter().find(|p| p.is_file())
}

/// Append a `debug { render-drm-device ... }` block unless the template
/// already sets one.
pub fn with_render_device(template: &str, device: Option<&Path>) -> String {
    match device {
        Some(device) if !template.contains(RENDER_DEVICE_KEY) => format!(
            "{template}\n// Explicitly set the DRM render device for EGL display creation.\ndebug {{\n    {RENDER_DEVICE_KEY} \"{}\"\n}}\n",
            device.display()
        ),
        _ => template.to_string(),
    }
}

pub fn config_destination(ctx: &SetupContext) -> Option<PathBuf> {
    let home = ctx.env.home.as_ref()?;
    Some(
        home.join(".config")
            .join(&ctx.config.compositor)
            .join("config.kdl"),
    )
}

pub fn configure(ctx: &SetupContext) -> Outcome {
    let Some(dest) = config_destination(ctx) else {
        return Outcome::fail("Failed to determine home directory");
    };

    let Some(source) = find_template(ctx) else {
        return Outcome::fail(format!(
            "{} not found next to executable or in current directory",
            ctx.config.template_name
        ));
    };

    let template = match fs::read_to_string(&source) {
        Ok(content) => content,
        Err(e) => return Outcome::fail(format!("Failed to read source config: {e}")),
    };

    if let Some(dir) = dest.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            return Outcome::fail(format!("Failed to create config directory: {e}"));
        }
    }

    let device = find_render_device(&ctx.config.device_dir, &ctx.config.device_prefix);
    let content = with_render_device(&template, device.as_deref());

    if let Err(e) = fs::write(&dest, content) {
        return Outcome::fail(format!("Failed to write config: {e}"));
    }
    info!("Wrote {} from {}", dest.display(), source.display());

    let mut lines = vec![format!(
        "{} configuration copied to {}",
        ctx.config.display_name(),
        dest.display()
    )];
    if let Some(device) = device {
        lines.push(format!("DRM render device set to: {}", device.display()));
    }
    lines.push(String::new());
    lines.extend(launch_hint(&ctx.config));
    Outcome::success(lines)
}
