use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const MENU_HELP: &str = "↑/↓ move  Enter select  q quit";

/// One-line footer: status on the left, key help after it.
/// A failed status uses the error style.
pub struct StatusBar<'a> {
    pub status: &'a str,
    pub failed: bool,
    pub help: Option<&'a str>,
    pub theme: &'a Theme,
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let status_style = if self.failed {
            self.theme.failure()
        } else {
            self.theme.inactive()
        };
        let mut spans = vec![Span::styled(self.status, status_style)];
        if let Some(help) = self.help {
            spans.push(Span::styled(format!("  |  {help}"), self.theme.inactive()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
