//! # Footer Component
//!
//! Key guide on the left, list position on the right. Purely presentational.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::component::Component;

const GUIDE: [&str; 2] = [
    "Scroll down/up using arrow keys or 'j'/'k'. Press 'q' to quit.",
    "  Fast scroll using 'J'/'K' or PgDn/PgUp.",
];

pub struct Footer {
    /// Zero-based index of the selected artist.
    pub selected: usize,
    pub total: usize,
}

impl Footer {
    pub fn new(selected: usize, total: usize) -> Self {
        Self { selected, total }
    }

    fn position_text(&self) -> String {
        if self.total == 0 {
            "no artists".to_string()
        } else {
            format!("{}/{} artists", self.selected + 1, self.total)
        }
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let guide: Vec<Line> = GUIDE.iter().map(|l| Line::raw(*l)).collect();
        frame.render_widget(Paragraph::new(guide), area);

        let position = Paragraph::new(self.position_text())
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Right);
        frame.render_widget(position, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_position_text() {
        assert_eq!(Footer::new(0, 0).position_text(), "no artists");
        assert_eq!(Footer::new(4, 120).position_text(), "5/120 artists");
    }

    #[test]
    fn test_footer_renders_guide_and_position() {
        let mut terminal = Terminal::new(TestBackend::new(100, 2)).unwrap();
        terminal
            .draw(|f| Footer::new(1, 2).render(f, f.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Press 'q' to quit."));
        assert!(text.contains("Fast scroll"));
        assert!(text.contains("2/2 artists"));
    }
}
