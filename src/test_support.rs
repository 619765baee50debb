//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::catalog::{Catalog, Concert};
use crate::core::config::ExtractorConfig;
use crate::scrape::{CalendarSource, Extractor, FetchError, RegexExtractor};

/// A trimmed-down calendar page: two listing cells for "A" (only one of which
/// is a concert row), one for "B", plus surrounding noise.
pub const SAMPLE_PAGE: &str = r#"<html>
<body>
<table class="calendar">
<tr><th class="head">Date</th></tr>
<td class="note"><b>A</b> returns to town</td>
<td class="day-1">Mon</td><td class="date0">01-15-2024</td><td class="artist"><b>A</b></td><td class="venue2">Hall</td><td class="cost3">$10</td>
<td class="day-1">Sun</td><td class="date0">12-31-2023</td><td class="artist"><b>B</b></td><td class="venue2">Arena</td><td class="cost3">Free</td>
</table>
</body>
</html>
"#;

/// One well-formed listing line.
pub fn row(artist: &str, weekday: &str, date: &str, venue: &str, cost: &str) -> String {
    format!(
        r#"<td class="day-1">{weekday}</td><td class="date0">{date}</td><td class="artist"><b>{artist}</b></td><td class="venue2">{venue}</td><td class="cost3">{cost}</td>"#
    )
}

/// Build a concert from the page's own `MM-DD-YYYY` form.
pub fn concert(venue: &str, date: &str, weekday: &str, cost: &str) -> Concert {
    let mut parts = date.split('-');
    let month = parts.next().unwrap_or("1").parse().unwrap_or(1);
    let day = parts.next().unwrap_or("01").to_string();
    let year = parts.next().unwrap_or("2024").to_string();
    Concert {
        venue: venue.to_string(),
        year,
        month,
        day,
        weekday: weekday.to_string(),
        cost: cost.to_string(),
    }
}

/// The catalog extracted from [`SAMPLE_PAGE`].
pub fn sample_catalog() -> Catalog {
    RegexExtractor::new(ExtractorConfig::default())
        .unwrap()
        .extract(SAMPLE_PAGE)
}

/// A catalog with `n` artists named `Artist 000`, `Artist 001`, ...
pub fn numbered_catalog(n: usize) -> Catalog {
    let mut catalog = Catalog::new();
    for i in 0..n {
        catalog.push(
            &format!("Artist {i:03}"),
            concert("Venue", "01-01-2024", "Mon", ""),
        );
    }
    catalog
}

/// An in-memory source for tests that don't need real HTTP.
pub struct StaticSource {
    page: Option<String>,
}

impl StaticSource {
    pub fn ok(page: &str) -> Self {
        Self {
            page: Some(page.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { page: None }
    }
}

#[async_trait]
impl CalendarSource for StaticSource {
    fn location(&self) -> &str {
        "memory"
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        self.page
            .clone()
            .ok_or_else(|| FetchError::Network("connection refused".to_string()))
    }
}

/// Flatten a rendered buffer row into a string.
pub fn buffer_row(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
    (buffer.area.x..buffer.area.right())
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// Flatten a whole rendered buffer into one string.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
