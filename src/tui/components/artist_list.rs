//! # ArtistList Component
//!
//! Left pane: the sorted artist names, windowed around the selection.
//!
//! The selected artist is always drawn on the pane's vertical midpoint,
//! indented and reverse-highlighted; its neighbours fan out above and below
//! until either the list or the pane runs out:
//!
//! ```text
//!  ____________________
//! |names[sel - 2]      |
//! |names[sel - 1]      |
//! |    NAMES[sel]      |   ← row height / 2
//! |names[sel + 1]      |
//! |names[sel + 2]      |
//! |____________________|
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::config::LayoutConfig;
use crate::tui::component::{Component, put_text};

/// Shorten `name` to at most `width` columns, marking the cut with "...".
pub fn truncate_name(name: &str, width: usize) -> String {
    if name.width() <= width {
        return name.to_string();
    }
    if width <= 3 {
        return ".".repeat(width);
    }
    let budget = width - 3;
    let mut used = 0;
    let mut out = String::new();
    for ch in name.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

pub struct ArtistList<'a> {
    pub names: &'a [String],
    pub selected: usize,
    pub layout: LayoutConfig,
}

impl<'a> ArtistList<'a> {
    pub fn new(names: &'a [String], selected: usize, layout: LayoutConfig) -> Self {
        Self {
            names,
            selected,
            layout,
        }
    }

    /// Columns available to an unselected name in a pane `width` wide.
    fn name_width(&self, width: u16) -> usize {
        width.saturating_sub(self.layout.list_reserved_cols) as usize
    }
}

impl Component for ArtistList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::bordered(), area);

        let margin = self.layout.list_margin;
        let mid = area.height / 2;

        if self.selected >= self.names.len() {
            put_text(
                frame,
                area,
                mid,
                margin,
                "No artists found",
                Style::default().add_modifier(Modifier::DIM),
            );
            return;
        }

        let width = self.name_width(area.width);
        let indent = self.layout.selection_indent;

        let current = truncate_name(
            &self.names[self.selected],
            width.saturating_sub(indent as usize),
        );
        put_text(
            frame,
            area,
            mid,
            margin + indent,
            &current,
            Style::default().add_modifier(Modifier::REVERSED),
        );

        for offset in 1..mid.saturating_sub(margin) {
            let step = offset as usize;
            if let Some(above) = self.selected.checked_sub(step) {
                let name = truncate_name(&self.names[above], width);
                put_text(frame, area, mid - offset, margin, &name, Style::default());
            }
            if let Some(below) = self.names.get(self.selected + step) {
                let name = truncate_name(below, width);
                put_text(frame, area, mid + offset, margin, &name, Style::default());
            }
        }
    }
}
