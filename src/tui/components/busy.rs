use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Spinner plus an optional message and "Please wait...".
/// Shown while a job runs; there is nothing to press.
pub struct BusyIndicator<'a> {
    pub message: &'a str,
    pub spinner_frame: usize,
    pub theme: &'a Theme,
}

impl<'a> BusyIndicator<'a> {
    pub fn new(message: &'a str, spinner_frame: usize, theme: &'a Theme) -> Self {
        Self {
            message,
            spinner_frame,
            theme,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
        let mut lines = Vec::new();
        if !self.message.is_empty() {
            lines.push(Line::from(Span::styled(self.message, self.theme.title())));
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled(spinner, self.theme.cursor()),
            Span::raw(" Please wait..."),
        ]));
        lines
    }
}

impl Component for BusyIndicator<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines()).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
