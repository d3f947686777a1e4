use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use crate::tui::components::status_bar::MENU_HELP;
use crate::tui::components::title_bar::TITLE_HEIGHT;
use crate::tui::components::{BusyIndicator, LogPanel, MenuList, StatusBar, TitleBar};
use crate::tui::theme::Theme;

/// Props shared by every screen that don't live in `App`.
pub struct View<'a> {
    pub title: &'a str,
    pub theme: &'a Theme,
    pub spinner_frame: usize,
}

pub fn draw_ui(frame: &mut Frame, app: &App, view: &View) {
    let area = frame.area();
    match app.screen {
        Screen::Menu => draw_menu(frame, area, app, view),
        Screen::Installing => draw_installing(frame, area, app, view),
        Screen::Working => draw_working(frame, area, app, view),
    }
}

fn draw_menu(frame: &mut Frame, area: Rect, app: &App, view: &View) {
    use Constraint::{Length, Min};

    let labels: Vec<String> = app.items.iter().map(|item| app.label(*item)).collect();
    let mut menu = MenuList::new(&labels, app.cursor, view.theme);

    let [title_area, menu_area, _, log_area, status_area] = Layout::vertical([
        Length(TITLE_HEIGHT),
        Length(menu.height()),
        Length(1),
        Min(0),
        Length(1),
    ])
    .areas(area);

    TitleBar::new(view.title, view.theme).render(frame, title_area);
    menu.render(frame, menu_area);

    if !app.logs.is_empty() {
        LogPanel::new("Log", &app.logs, view.theme.logs()).render(frame, log_area);
    }

    StatusBar {
        status: &app.status_message,
        failed: app.error.is_some(),
        help: Some(MENU_HELP),
        theme: view.theme,
    }
    .render(frame, status_area);
}

fn draw_installing(frame: &mut Frame, area: Rect, app: &App, view: &View) {
    use Constraint::{Length, Min};

    let [title_area, log_area, busy_area] =
        Layout::vertical([Length(TITLE_HEIGHT), Min(0), Length(1)]).areas(area);

    let heading = format!("Installing {}...", app.name);
    TitleBar::new(&heading, view.theme).render(frame, title_area);
    if !app.logs.is_empty() {
        LogPanel::new("Log", &app.logs, view.theme.logs()).render(frame, log_area);
    }
    BusyIndicator::new("", view.spinner_frame, view.theme).render(frame, busy_area);
}

fn draw_working(frame: &mut Frame, area: Rect, app: &App, view: &View) {
    use Constraint::{Fill, Length};

    let [title_area, _, busy_area, _] =
        Layout::vertical([Length(TITLE_HEIGHT), Fill(1), Length(3), Fill(1)]).areas(area);

    TitleBar::new(view.title, view.theme).render(frame, title_area);
    BusyIndicator::new(&app.action_message, view.spinner_frame, view.theme)
        .render(frame, busy_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::menu::MenuItem;
    use crate::core::outcome::Outcome;
    use crate::test_support::test_app;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let view = View {
            title: "Niri Setup Assistant for GhostBSD",
            theme: &theme,
            spinner_frame: 0,
        };
        terminal.draw(|f| draw_ui(f, app, &view)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_menu_shows_every_label_and_cursor() {
        let app = test_app();
        let text = render(&app);
        assert!(text.contains("Niri Setup Assistant for GhostBSD"));
        for item in &app.items {
            assert!(text.contains(&app.label(*item)));
        }
        assert!(text.contains("> Install Niri"));
        assert!(text.contains("Select an action"));
    }

    #[test]
    fn test_installing_screen() {
        let mut app = test_app();
        update(&mut app, Action::Select);
        let text = render(&app);
        assert!(text.contains("Installing Niri..."));
        assert!(text.contains("Please wait..."));
        assert!(!text.contains("> Install Niri"));
    }

    #[test]
    fn test_working_screen_shows_action_message() {
        let mut app = test_app();
        app.cursor = app.items.iter().position(|i| *i == MenuItem::Validate).unwrap();
        update(&mut app, Action::Select);
        let text = render(&app);
        assert!(text.contains("Validating Niri config..."));
        assert!(text.contains("Please wait..."));
    }

    #[test]
    fn test_menu_shows_retained_logs() {
        let mut app = test_app();
        app.cursor = app.items.iter().position(|i| *i == MenuItem::Validate).unwrap();
        update(&mut app, Action::Select);
        update(&mut app, Action::Completed(Outcome::fail("Validation failed: oops")));
        let text = render(&app);
        assert!(text.contains("Validation failed: oops"));
        assert!(text.contains("Validate Config failed"));
    }
}
