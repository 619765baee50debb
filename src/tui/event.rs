use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::core::action::Action;

/// Block until the next terminal event and translate it into an `Action`.
///
/// Key releases are skipped. Every other non-key event (resize, focus, mouse)
/// becomes `Action::Ignore`, which just triggers a redraw.
pub fn read_action() -> std::io::Result<Action> {
    loop {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Release => continue,
            Event::Key(key_event) => {
                debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code, key_event.modifiers
                );
                return Ok(map_key(key_event));
            }
            Event::Resize(width, height) => {
                debug!("Resize to {}x{}", width, height);
                return Ok(Action::Ignore);
            }
            _ => return Ok(Action::Ignore),
        }
    }
}

/// Fixed key bindings.
pub fn map_key(key_event: KeyEvent) -> Action {
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::Quit,
        (_, KeyCode::Char('q' | 'Q')) => Action::Quit,
        (_, KeyCode::Up | KeyCode::Char('k')) => Action::ScrollUp,
        (_, KeyCode::Down | KeyCode::Char('j')) => Action::ScrollDown,
        (_, KeyCode::PageUp | KeyCode::Char('K')) => Action::PageUp,
        (_, KeyCode::PageDown | KeyCode::Char('J')) => Action::PageDown,
        _ => Action::Ignore,
    }
}
