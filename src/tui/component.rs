use ratatui::Frame;
use ratatui::layout::{Margin, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// Every component owns its whole `Rect`: it clears it and redraws from
/// scratch on each call, so no frame ever shows a previous frame's text.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Write `text` at (`row`, `col`) relative to the top-left corner of a
/// bordered `window`, clipped to the inside of the border.
///
/// Anything that falls outside the window (a short terminal, a long name)
/// is dropped instead of spilling into neighbouring panes.
pub fn put_text(frame: &mut Frame, window: Rect, row: u16, col: u16, text: &str, style: Style) {
    let inner = window.inner(Margin::new(1, 1));
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let target = Rect::new(
        window.x.saturating_add(col),
        window.y.saturating_add(row),
        width,
        1,
    )
    .intersection(inner);
    if target.is_empty() {
        return;
    }
    frame.render_widget(Span::styled(text, style), target);
}
