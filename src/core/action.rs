//! # Actions
//!
//! Everything that can happen in the assistant becomes an `Action`.
//! User presses Enter? That's `Action::Select`.
//! A setup job finishes? That's `Action::Completed(outcome)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the caller to carry out.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::menu::{Job, MenuItem};
use crate::core::outcome::Outcome;
use crate::core::state::{App, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    Select,
    Quit,
    Completed(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Run(Job),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Completed(outcome) => complete(app, outcome),
        // While a job runs, keys do nothing: no cancellation, no quitting.
        _ if app.is_busy() => {
            debug!("Ignoring {:?} while busy", action);
            Effect::None
        }
        Action::CursorUp => {
            app.cursor = app.cursor.saturating_sub(1);
            Effect::None
        }
        Action::CursorDown => {
            if app.cursor + 1 < app.items.len() {
                app.cursor += 1;
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
        Action::Select => select(app),
    }
}

fn select(app: &mut App) -> Effect {
    let Some(item) = app.current_item() else {
        return Effect::None;
    };
    app.selected = Some(item);

    let job = match item {
        MenuItem::Exit => return Effect::Quit,
        MenuItem::Install => Job::Install,
        MenuItem::SetupSystem => Job::SetupSystem,
        MenuItem::Configure => Job::Configure,
        MenuItem::Validate => Job::Validate,
        MenuItem::SaveLogs => Job::SaveLogs(app.logs.clone()),
    };

    match item.busy_message(&app.name) {
        Some(message) => {
            app.screen = Screen::Working;
            app.action_message = message;
        }
        None => {
            app.screen = Screen::Installing;
            app.action_message.clear();
        }
    }
    app.error = None;
    app.status_message = format!("{}...", app.label(item));
    info!("Dispatching {} job", job_name(&job));
    Effect::Run(job)
}

fn complete(app: &mut App, outcome: Outcome) -> Effect {
    if !app.is_busy() {
        warn!("Completion arrived with no job in flight; logging it anyway");
    }

    let label = app
        .selected
        .map(|item| app.label(item))
        .unwrap_or_else(|| "Action".to_string());

    app.logs.extend(outcome.lines.iter().cloned());
    app.screen = Screen::Menu;

    match outcome.error {
        None => {
            info!("{} finished", label);
            if app.selected.is_some_and(MenuItem::clears_logs) {
                app.logs.clear();
            }
            app.action_message = outcome.lines.first().cloned().unwrap_or_default();
            app.error = None;
            app.status_message = format!("{label}: done");
        }
        Some(err) => {
            warn!("{} failed: {}", label, err);
            app.status_message = format!("{label} failed: {err}");
            app.error = Some(err);
        }
    }
    Effect::None
}

fn job_name(job: &Job) -> &'static str {
    match job {
        Job::Install => "install",
        Job::SetupSystem => "setup-system",
        Job::Configure => "configure",
        Job::Validate => "validate",
        Job::SaveLogs(_) => "save-logs",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn select_item(app: &mut App, item: MenuItem) -> Effect {
        app.cursor = app.items.iter().position(|i| *i == item).unwrap();
        update(app, Action::Select)
    }

    #[test]
    fn test_cursor_saturates_at_top() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::CursorUp), Effect::None);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_cursor_saturates_at_bottom() {
        let mut app = test_app();
        for _ in 0..20 {
            update(&mut app, Action::CursorDown);
        }
        assert_eq!(app.cursor, app.items.len() - 1);
        assert_eq!(app.current_item(), Some(MenuItem::Exit));
    }

    #[test]
    fn test_quit_key_quits_from_menu() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_exit_item_quits() {
        let mut app = test_app();
        assert_eq!(select_item(&mut app, MenuItem::Exit), Effect::Quit);
        assert_eq!(app.screen, Screen::Menu);
    }

    #[test]
    fn test_select_install_goes_to_installing() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Select);
        assert_eq!(effect, Effect::Run(Job::Install));
        assert_eq!(app.screen, Screen::Installing);
        assert_eq!(app.selected, Some(MenuItem::Install));
    }

    #[test]
    fn test_select_configure_goes_to_working_with_message() {
        let mut app = test_app();
        let effect = select_item(&mut app, MenuItem::Configure);
        assert_eq!(effect, Effect::Run(Job::Configure));
        assert_eq!(app.screen, Screen::Working);
        assert_eq!(app.action_message, "Configuring Niri...");
    }

    #[test]
    fn test_save_logs_snapshots_buffer() {
        let mut app = test_app();
        app.logs = vec!["one".into(), "two".into()];
        let effect = select_item(&mut app, MenuItem::SaveLogs);
        assert_eq!(effect, Effect::Run(Job::SaveLogs(vec!["one".into(), "two".into()])));
    }

    #[test]
    fn test_keys_ignored_while_busy() {
        let mut app = test_app();
        select_item(&mut app, MenuItem::Validate);
        let (cursor, selected, screen) = (app.cursor, app.selected, app.screen);

        for action in [Action::CursorUp, Action::CursorDown, Action::Select, Action::Quit] {
            assert_eq!(update(&mut app, action), Effect::None);
            assert_eq!(app.cursor, cursor);
            assert_eq!(app.selected, selected);
            assert_eq!(app.screen, screen);
        }
    }

    #[test]
    fn test_successful_install_clears_logs() {
        let mut app = test_app();
        app.logs = vec!["older".into()];
        update(&mut app, Action::Select);
        update(
            &mut app,
            Action::Completed(Outcome::success(vec!["Already installed: niri".into()])),
        );
        assert_eq!(app.screen, Screen::Menu);
        assert!(app.logs.is_empty());
        assert_eq!(app.status_message, "Install Niri: done");
    }

    #[test]
    fn test_failed_install_keeps_logs() {
        let mut app = test_app();
        update(&mut app, Action::Select);
        update(
            &mut app,
            Action::Completed(Outcome::failure(
                vec!["Failed to install niri: no such package".into()],
                "1 packages failed to install",
            )),
        );
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.logs, vec!["Failed to install niri: no such package"]);
        assert_eq!(app.error.as_deref(), Some("1 packages failed to install"));
    }

    #[test]
    fn test_non_install_success_keeps_logs() {
        let mut app = test_app();
        select_item(&mut app, MenuItem::Validate);
        update(
            &mut app,
            Action::Completed(Outcome::success(vec!["Niri configuration is valid.".into()])),
        );
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.logs, vec!["Niri configuration is valid."]);
        assert_eq!(app.action_message, "Niri configuration is valid.");
    }

    #[test]
    fn test_menu_usable_after_completion() {
        let mut app = test_app();
        select_item(&mut app, MenuItem::Validate);
        update(&mut app, Action::Completed(Outcome::fail("Validation failed: bad")));
        update(&mut app, Action::CursorDown);
        assert_eq!(app.current_item(), Some(MenuItem::SaveLogs));
    }
}
