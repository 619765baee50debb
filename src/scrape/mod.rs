//! # Scraping
//!
//! Getting from a URL to a [`Catalog`]: a [`CalendarSource`] produces the
//! raw page, an [`Extractor`] reads the listings out of it.
//!
//! ```text
//! CalendarSource::fetch()  →  String  →  Extractor::extract()  →  Catalog
//! ```
//!
//! Both sides are traits so tests can feed canned markup and the parsing
//! strategy can change without touching navigation or rendering.

pub mod extract;
pub mod fetch;

pub use extract::{Extractor, ExtractorError, RegexExtractor};
pub use fetch::{CalendarSource, FetchError, HttpSource};

use log::info;

use crate::core::catalog::Catalog;

/// Fetch the page once and extract it.
pub async fn load_catalog(
    source: &dyn CalendarSource,
    extractor: &dyn Extractor,
) -> Result<Catalog, FetchError> {
    let page = source.fetch().await?;
    let catalog = extractor.extract(&page);
    info!(
        "Loaded {} artists ({} concerts) from {}",
        catalog.len(),
        catalog.concert_count(),
        source.location()
    );
    Ok(catalog)
}
