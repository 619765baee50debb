use crate::core::config::LayoutConfig;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{ArtistList, ConcertDetail, Footer};

use ratatui::Frame;
use ratatui::layout::Rect;

/// Where each part of the screen goes.
///
/// ```text
///  margin
///  ┌──────────────┐    ┌──────────────┐
///  │ artist list  │    │ concert      │
///  │              │    │ detail       │
///  └──────────────┘    └──────────────┘
///  guide ...                  n/N artists
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panes {
    pub list: Rect,
    pub detail: Rect,
    pub footer: Rect,
}

pub fn panes(area: Rect, layout: &LayoutConfig) -> Panes {
    let m = layout.outer_margin;
    let pane_height = area.height.saturating_sub(2 * m);
    let pane_width = (area.width / 2).saturating_sub(2 * m);

    let list = Rect::new(
        area.x + m.min(area.width),
        area.y + m.min(area.height),
        pane_width,
        pane_height,
    );
    let detail = Rect::new(
        list.x.saturating_add(pane_width).saturating_add(2 * m).min(area.right()),
        list.y,
        pane_width,
        pane_height,
    )
    .intersection(area);
    let footer_y = area.bottom().saturating_sub(m);
    let footer = Rect::new(
        area.x + m.min(area.width),
        footer_y,
        area.width.saturating_sub(2 * m),
        m.min(area.height),
    )
    .intersection(area);

    Panes {
        list: list.intersection(area),
        detail,
        footer,
    }
}

/// Fast-scroll step for a list pane of the given height: one page.
pub fn page_size(list: Rect, layout: &LayoutConfig) -> usize {
    list.height.saturating_sub(2 * layout.outer_margin).max(1) as usize
}

/// Draw the whole screen and return the fast-scroll step for this geometry.
pub fn draw_ui(frame: &mut Frame, app: &App, layout: &LayoutConfig) -> usize {
    let panes = panes(frame.area(), layout);

    let (artist, concerts) = match app.selection() {
        Some((name, concerts)) => (Some(name), concerts),
        None => (None, &[][..]),
    };

    ArtistList::new(app.nav.artists(), app.nav.selected(), *layout)
        .render(frame, panes.list);
    ConcertDetail::new(artist, concerts, *layout).render(frame, panes.detail);
    Footer::new(app.nav.selected(), app.nav.len()).render(frame, panes.footer);

    page_size(panes.list, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::catalog::Catalog;
    use crate::test_support::{buffer_text, numbered_catalog, sample_catalog};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, width: u16, height: u16) -> (Terminal<TestBackend>, usize) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut page = 0;
        terminal
            .draw(|f| {
                page = draw_ui(f, app, &LayoutConfig::default());
            })
            .unwrap();
        (terminal, page)
    }

    #[test]
    fn test_panes_layout() {
        let panes = panes(Rect::new(0, 0, 80, 24), &LayoutConfig::default());
        assert_eq!(panes.list, Rect::new(2, 2, 36, 20));
        assert_eq!(panes.detail, Rect::new(42, 2, 36, 20));
        assert_eq!(panes.footer, Rect::new(2, 22, 76, 2));
    }

    #[test]
    fn test_page_size_is_pane_height_less_margins() {
        let layout = LayoutConfig::default();
        assert_eq!(page_size(Rect::new(2, 2, 36, 20), &layout), 16);
        assert_eq!(page_size(Rect::new(2, 2, 36, 3), &layout), 1);
    }

    #[test]
    fn test_draw_ui() {
        let app = App::new(sample_catalog());
        let (terminal, page) = draw(&app, 80, 24);
        let text = buffer_text(terminal.backend().buffer());

        assert_eq!(page, 16);
        assert!(text.contains("Hall"));
        assert!(text.contains("Mon 15 January 2024"));
        assert!(text.contains("$10"));
        assert!(text.contains("1/2 artists"));
    }

    #[test]
    fn test_selecting_second_artist_shows_its_concerts() {
        let mut app = App::new(sample_catalog());
        update(&mut app.nav, Action::ScrollDown, 1);
        assert_eq!(app.nav.selected(), 1);

        let (terminal, _) = draw(&app, 80, 24);
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Arena"));
        assert!(text.contains("Sun 31 December 2023"));
        assert!(text.contains("Free"));
        assert!(!text.contains("Hall"));
        assert!(text.contains("2/2 artists"));
    }

    #[test]
    fn test_empty_catalog_renders_placeholders() {
        let app = App::new(Catalog::new());
        let (terminal, _) = draw(&app, 80, 24);
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("No artists found"));
        assert!(text.contains("No concerts to show"));
        assert!(text.contains("no artists"));
    }

    #[test]
    fn test_undersized_terminal_does_not_panic() {
        let app = App::new(numbered_catalog(50));
        for (w, h) in [(1, 1), (4, 3), (9, 5), (20, 4)] {
            draw(&app, w, h);
        }
    }

    #[test]
    fn test_page_down_uses_drawn_page_size() {
        let mut app = App::new(numbered_catalog(50));
        let (_, page) = draw(&app, 80, 24);
        update(&mut app.nav, Action::PageDown, page);
        assert_eq!(app.nav.selected_name(), Some("Artist 016"));
    }
}
