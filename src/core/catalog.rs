//! # Catalog
//!
//! The structured result of scraping the calendar: every artist mapped to
//! the concerts listed for them, in the order the page lists them.
//!
//! ```text
//! Catalog
//! └── artists: BTreeMap<String, Vec<Concert>>
//!     └── "Artist" → [Concert, Concert, ...]   // page order, not chronological
//! ```
//!
//! A `Catalog` is built once at startup and never mutated afterwards.

use std::collections::BTreeMap;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a 1-based month number. Out-of-range values wrap modulo 12,
/// so 13 is January and 0 is December.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[normalize_month(month) as usize - 1]
}

/// Reduce a 1-based month number into `1..=12`.
pub fn normalize_month(month: u32) -> u32 {
    (i64::from(month) - 1).rem_euclid(12) as u32 + 1
}

/// A single listing for one artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concert {
    pub venue: String,
    pub year: String,
    /// Month as printed on the page. Not range-checked; see [`normalize_month`].
    pub month: u32,
    pub day: String,
    pub weekday: String,
    /// Blank for free shows or when the page omits it.
    pub cost: String,
}

impl Concert {
    /// "Mon 15 January 2024"
    pub fn date_line(&self) -> String {
        format!(
            "{} {} {} {}",
            self.weekday,
            self.day,
            month_name(self.month),
            self.year
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    artists: BTreeMap<String, Vec<Concert>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a concert to the artist's listing, creating the artist on first sight.
    pub fn push(&mut self, artist: &str, concert: Concert) {
        self.artists
            .entry(artist.to_string())
            .or_default()
            .push(concert);
    }

    pub fn concerts(&self, artist: &str) -> &[Concert] {
        self.artists.get(artist).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Artist names in lexicographic order.
    pub fn artist_names(&self) -> Vec<String> {
        self.artists.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn concert_count(&self) -> usize {
        self.artists.values().map(Vec::len).sum()
    }
}
