use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive everything they show as props (struct fields) and
/// render into a `Rect`. None of them own session state; that lives in
/// `core::state::App`.
///
/// `render` takes `&mut self` so a component may cache layout work between
/// the measure and draw steps of a single frame.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
