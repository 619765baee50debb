//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders the two panes,
//! and translates keyboard events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly sequential, one thread:
//!
//! ```text
//! draw  →  block on next key  →  update(nav, action)  →  draw ...
//! ```
//!
//! There is no timer and no background work, so the loop only redraws after
//! an event. `Effect::Quit` is the only way out besides a terminal I/O error.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::{LayoutConfig, ResolvedConfig};
use crate::core::state::App;
use crate::tui::event::read_action;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // The selection is shown by highlighting, so the cursor only gets in the way
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Run the viewer until the user quits. The terminal is restored before
/// returning, whether the loop ended normally or with an error.
pub fn run(catalog: Catalog, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(catalog);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &config.layout));
    ratatui::restore();

    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    layout: &LayoutConfig,
) -> std::io::Result<()> {
    loop {
        let mut page = 1;
        terminal.draw(|f| page = ui::draw_ui(f, app, layout))?;

        let action = read_action()?;
        if update(&mut app.nav, action, page) == Effect::Quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}
