//! # MenuList Component
//!
//! The action menu. The row under the cursor gets a `> ` marker and the
//! accent style; every other row is dimmed. Labels are padded to a fixed
//! display width so the highlight is the same length on every row.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Display width of a row, marker included.
pub const ITEM_WIDTH: usize = 25;

pub struct MenuList<'a> {
    pub labels: &'a [String],
    pub cursor: usize,
    pub theme: &'a Theme,
}

impl<'a> MenuList<'a> {
    pub fn new(labels: &'a [String], cursor: usize, theme: &'a Theme) -> Self {
        Self {
            labels,
            cursor,
            theme,
        }
    }

    pub fn height(&self) -> u16 {
        self.labels.len() as u16
    }

    fn lines(&self) -> Vec<Line<'static>> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let (marker, style) = if i == self.cursor {
                    ("> ", self.theme.cursor())
                } else {
                    ("  ", self.theme.inactive())
                };
                let text = format!("{marker}{}", pad_to_width(label, ITEM_WIDTH - 2));
                Line::from(Span::styled(text, style))
            })
            .collect()
    }
}

impl Component for MenuList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}

/// Right-pad `text` with spaces to `width` terminal columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - used))
}
