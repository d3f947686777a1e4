//! # TitleBar Component
//!
//! Heading at the top of every screen: the assistant's title on the menu,
//! "Installing Niri..." while packages go in.
//!
//! Purely presentational. Height is always 3: a blank line, the title, and
//! a blank line, so switching screens never shifts the content below.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const TITLE_HEIGHT: u16 = 3;

pub struct TitleBar<'a> {
    pub title: &'a str,
    pub theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self { title, theme }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.title)
            .style(self.theme.title())
            .alignment(Alignment::Center)
            .block(Block::default().padding(Padding::vertical(1)));
        frame.render_widget(paragraph, area);
    }
}
