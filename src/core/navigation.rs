//! # Navigation State
//!
//! The sorted artist list and which entry is selected. The selection is
//! clamped after every move, so an out-of-range index never reaches a
//! renderer.

use crate::core::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    artists: Vec<String>,
    selected: usize,
}

impl Navigation {
    pub fn new(artists: Vec<String>) -> Self {
        Self {
            artists,
            selected: 0,
        }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.artist_names())
    }

    /// Move the selection by `delta` rows, clamping to the ends of the list.
    pub fn move_by(&mut self, delta: isize) {
        if self.artists.is_empty() {
            self.selected = 0;
            return;
        }
        let last = (self.artists.len() - 1) as isize;
        self.selected = (self.selected as isize).saturating_add(delta).clamp(0, last) as usize;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// `None` when there are no artists.
    pub fn selected_name(&self) -> Option<&str> {
        self.artists.get(self.selected).map(String::as_str)
    }

    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}
