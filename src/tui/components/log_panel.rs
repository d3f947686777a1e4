//! # LogPanel Component
//!
//! Bordered view of the log buffer. Lines wrap, and the view is pinned to
//! the bottom so the newest output is always visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct LogPanel<'a> {
    pub title: &'a str,
    pub lines: &'a [String],
    pub style: Style,
}

impl<'a> LogPanel<'a> {
    pub fn new(title: &'a str, lines: &'a [String], style: Style) -> Self {
        Self {
            title,
            lines,
            style,
        }
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.lines.join("\n"))
            .style(self.style)
            .block(Block::bordered().title(self.title))
            .wrap(Wrap { trim: false })
    }

    /// Scroll offset that keeps the last line on the bottom row.
    pub fn bottom_offset(&self, area: Rect) -> u16 {
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2) as usize;
        // line_count includes the two border rows
        let content = self.paragraph().line_count(inner_width).saturating_sub(2);
        content.saturating_sub(inner_height) as u16
    }
}

impl Component for LogPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let offset = self.bottom_offset(area);
        frame.render_widget(self.paragraph().scroll((offset, 0)), area);
    }
}
