//! Regex extraction of concert rows from the calendar markup.
//!
//! Each listing on the page sits on one line of table cells, roughly:
//!
//! ```text
//! <td class="day-1">Mon</td><td class="date0">01-15-2024</td>
//!   <td><b>Artist</b></td><td class="venue2">Hall</td><td class="cost3">$10</td>
//! ```
//!
//! The cell class suffixes (`-1`, `0`, `2`, `3`) identify the fields.

use std::fmt;

use log::{debug, warn};
use regex::Regex;

use crate::core::catalog::{Catalog, Concert};
use crate::core::config::ExtractorConfig;

/// Turns raw page text into a [`Catalog`].
pub trait Extractor {
    fn extract(&self, page: &str) -> Catalog;
}

#[derive(Debug)]
pub enum ExtractorError {
    Pattern(regex::Error),
}

impl fmt::Display for ExtractorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractorError::Pattern(e) => write!(f, "invalid extraction pattern: {e}"),
        }
    }
}

impl std::error::Error for ExtractorError {}

impl From<regex::Error> for ExtractorError {
    fn from(e: regex::Error) -> Self {
        ExtractorError::Pattern(e)
    }
}

/// Why a line with an artist name produced no concert.
#[derive(Debug, PartialEq, Eq)]
enum LineError {
    MissingArtist,
    MissingWeekday,
    MissingDate,
    MissingVenue,
    BadDate(String),
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::MissingArtist => write!(f, "blank artist name"),
            LineError::MissingWeekday => write!(f, "no weekday"),
            LineError::MissingDate => write!(f, "no date"),
            LineError::MissingVenue => write!(f, "no venue"),
            LineError::BadDate(date) => write!(f, "unreadable date {date:?}"),
        }
    }
}

pub struct RegexExtractor {
    config: ExtractorConfig,
    artist: Regex,
    weekday: Regex,
    date: Regex,
    venue: Regex,
    cost: Regex,
}

impl RegexExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        Ok(Self {
            config,
            artist: Regex::new(r"<b>([^<]+)<")?,
            weekday: Regex::new(r#"-1">([a-zA-Z]{3})<"#)?,
            date: Regex::new(r#"0">([0-9-]{10})"#)?,
            venue: Regex::new(r#"2">([^<]*)"#)?,
            cost: Regex::new(r#"3">([^<]*)"#)?,
        })
    }

    fn capture<'l>(re: &Regex, line: &'l str) -> Option<&'l str> {
        re.captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn parse_concert(&self, line: &str) -> Result<Concert, LineError> {
        let weekday = Self::capture(&self.weekday, line).ok_or(LineError::MissingWeekday)?;
        let date = Self::capture(&self.date, line).ok_or(LineError::MissingDate)?;
        let venue = Self::capture(&self.venue, line)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(LineError::MissingVenue)?;
        let cost = Self::capture(&self.cost, line).unwrap_or("").trim();

        // MM-DD-YYYY
        let parts: Vec<&str> = date.split('-').collect();
        let [month, day, year] = parts.as_slice() else {
            return Err(LineError::BadDate(date.to_string()));
        };
        let digits =
            |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
        if !digits(*day, 2) || !digits(*year, 4) {
            return Err(LineError::BadDate(date.to_string()));
        }
        let month: u32 = month
            .parse()
            .map_err(|_| LineError::BadDate(date.to_string()))?;

        Ok(Concert {
            venue: venue.to_string(),
            year: year.to_string(),
            month,
            day: day.to_string(),
            weekday: weekday.to_string(),
            cost: cost.to_string(),
        })
    }
}

impl Extractor for RegexExtractor {
    fn extract(&self, page: &str) -> Catalog {
        let mut catalog = Catalog::new();
        let mut skipped = 0usize;

        for (number, line) in page
            .lines()
            .enumerate()
            .filter(|(_, line)| line.contains(&self.config.marker))
        {
            let Some(name) = Self::capture(&self.artist, line) else {
                continue;
            };
            let parsed = match name.trim() {
                "" => Err(LineError::MissingArtist),
                _ => self.parse_concert(line),
            };
            match parsed {
                Ok(concert) => catalog.push(name.trim(), concert),
                Err(e) => {
                    skipped += 1;
                    warn!("Skipping line {} for {:?}: {}", number + 1, name, e);
                }
            }
        }

        debug!(
            "Extracted {} concerts for {} artists ({} lines skipped)",
            catalog.concert_count(),
            catalog.len(),
            skipped
        );
        catalog
    }
}
