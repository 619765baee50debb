//! # Actions
//!
//! Everything the user can do becomes an `Action`.
//! Arrow down? That's `Action::ScrollDown`. `q`? That's `Action::Quit`.
//!
//! The `update()` function takes the current navigation state and an action,
//! mutates the state and returns an `Effect` telling the event loop what to
//! do next. No I/O here.
//!
//! ```text
//! Navigation + Action  →  update()  →  Navigation' + Effect
//! ```
//!
//! The event loop is a two-state machine: it stays `Running` while
//! `update` returns `Effect::None` and stops for good on `Effect::Quit`.

use log::debug;

use crate::core::navigation::Navigation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Quit,
    /// Any input with no binding. Redraws without changing state.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// Apply `action` to `nav`. `page` is the fast-scroll step; values below 1
/// are treated as 1.
///
/// Page steps behave the same in both directions: the step is applied and
/// the result clamped, so paging past either end lands on that end.
pub fn update(nav: &mut Navigation, action: Action, page: usize) -> Effect {
    let page = page.max(1).min(isize::MAX as usize) as isize;
    match action {
        Action::ScrollUp => nav.move_by(-1),
        Action::ScrollDown => nav.move_by(1),
        Action::PageUp => nav.move_by(-page),
        Action::PageDown => nav.move_by(page),
        Action::Quit => return Effect::Quit,
        Action::Ignore => {}
    }
    debug!("{:?} -> selected {}", action, nav.selected());
    Effect::None
}
