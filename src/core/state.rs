//! # Application State
//!
//! Everything the viewer knows, in one place. No TUI types here.
//!
//! ```text
//! App
//! ├── catalog: Catalog        // scraped data, read-only
//! └── nav: Navigation         // sorted names + selected index
//! ```
//!
//! Only `nav` changes after startup, and only through `update()` in action.rs.

use crate::core::catalog::{Catalog, Concert};
use crate::core::navigation::Navigation;

pub struct App {
    pub catalog: Catalog,
    pub nav: Navigation,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let nav = Navigation::from_catalog(&catalog);
        Self { catalog, nav }
    }

    /// The selected artist and their concerts, or `None` for an empty catalog.
    pub fn selection(&self) -> Option<(&str, &[Concert])> {
        self.nav
            .selected_name()
            .map(|name| (name, self.catalog.concerts(name)))
    }
}
