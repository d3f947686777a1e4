//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Each turn the loop draws (when something changed), polls keys, feeds them
//! through `update()`, then drains the job channel. A dispatched job runs on
//! tokio's blocking pool and sends exactly one `Action::Completed` back, so
//! the UI keeps redrawing while `pkg` works.
//!
//! - **Busy**: redraws every ~80ms to animate the spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on input.

mod component;
mod components;
mod event;
pub mod theme;
mod ui;

use log::{debug, error, info, warn};
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::menu::Job;
use crate::core::outcome::Outcome;
use crate::core::state::App;
use crate::setup::{SetupContext, run_job};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;
use crate::tui::ui::View;

pub fn run(ctx: SetupContext) -> std::io::Result<()> {
    let config: &ResolvedConfig = &ctx.config;
    let theme = Theme::from_config(&config.theme);
    let title = config.title.clone();
    let mut app = App::new(config.display_name());

    let mut terminal = ratatui::init();

    // Completion messages from background jobs
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = app.is_busy();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            let view = View {
                title: &title,
                theme: &theme,
                spinner_frame,
            };
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &view)) {
                ratatui::restore();
                return Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = event.action() else {
                continue;
            };
            match update(&mut app, action) {
                Effect::Quit => break 'main,
                Effect::Run(job) => spawn_job(job, ctx.clone(), tx.clone()),
                Effect::None => {}
            }
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            // Completions never produce further effects
            if update(&mut app, action) == Effect::Quit {
                break 'main;
            }
        }
    }

    info!("Exiting");
    ratatui::restore();
    Ok(())
}

fn spawn_job(job: Job, ctx: SetupContext, tx: mpsc::Sender<Action>) {
    info!("Spawning job on blocking pool");
    tokio::task::spawn_blocking(move || {
        let outcome = run_job_caught(job, &ctx);
        if tx.send(Action::Completed(outcome)).is_err() {
            warn!("Failed to send job outcome: receiver dropped");
        }
    });
}

/// Runs a job, turning a panic into a failed outcome so the UI always
/// leaves the busy screen.
fn run_job_caught(job: Job, ctx: &SetupContext) -> Outcome {
    match panic::catch_unwind(AssertUnwindSafe(|| run_job(job, ctx))) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!("Job panicked: {}", reason);
            Outcome::fail(format!("Internal error: {reason}"))
        }
    }
}
