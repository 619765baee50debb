//! # ConcertDetail Component
//!
//! Right pane: the selected artist's name as a heading, then each concert
//! as a three-line entry, in page order:
//!
//! ```text
//!   Artist Name
//!
//!     Venue                   ← bold
//!         Mon 15 January 2024
//!         $10
//!
//!     Next Venue
//!         ...
//! ```
//!
//! Entries sit a fixed stride apart; ones that don't fit are clipped by the
//! pane border.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear};

use crate::core::catalog::Concert;
use crate::core::config::LayoutConfig;
use crate::tui::component::{Component, put_text};

pub struct ConcertDetail<'a> {
    /// `None` when there is nothing to select.
    pub artist: Option<&'a str>,
    pub concerts: &'a [Concert],
    pub layout: LayoutConfig,
}

impl<'a> ConcertDetail<'a> {
    pub fn new(artist: Option<&'a str>, concerts: &'a [Concert], layout: LayoutConfig) -> Self {
        Self {
            artist,
            concerts,
            layout,
        }
    }
}

impl Component for ConcertDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::bordered(), area);

        let margin = self.layout.detail_margin;
        let half = margin / 2;

        let Some(artist) = self.artist else {
            put_text(
                frame,
                area,
                half,
                half,
                "No concerts to show",
                Style::default().add_modifier(Modifier::DIM),
            );
            return;
        };

        put_text(
            frame,
            area,
            half,
            half,
            artist,
            Style::default().add_modifier(Modifier::UNDERLINED),
        );

        let mut row = margin;
        for concert in self.concerts {
            if row >= area.height {
                break;
            }
            put_text(
                frame,
                area,
                row,
                margin,
                &concert.venue,
                Style::default().add_modifier(Modifier::BOLD),
            );
            put_text(
                frame,
                area,
                row.saturating_add(1),
                margin * 2,
                &concert.date_line(),
                Style::default(),
            );
            put_text(
                frame,
                area,
                row.saturating_add(2),
                margin * 2,
                &concert.cost,
                Style::default(),
            );
            row = row.saturating_add(self.layout.detail_stride);
        }
    }
}
