//! Concert calendar viewer library exports for testing

pub mod core;
pub mod scrape;
pub mod tui;

#[cfg(test)]
pub mod test_support;
