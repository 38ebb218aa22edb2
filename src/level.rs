// JLPT level resolution.
// Maps a level code to the number of grammar listing pages on the site.

use std::fmt;
use std::str::FromStr;

use crate::error::NotesError;

/// JLPT proficiency level, N5 being the easiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    N1,
    #[default]
    N2,
    N3,
    N4,
    N5,
}

impl Level {
    pub const ALL: [Level; 5] = [Level::N1, Level::N2, Level::N3, Level::N4, Level::N5];

    /// Canonical upper-case code, as used in listing URLs and file names.
    pub fn code(&self) -> &'static str {
        match self {
            Level::N1 => "N1",
            Level::N2 => "N2",
            Level::N3 => "N3",
            Level::N4 => "N4",
            Level::N5 => "N5",
        }
    }

    /// Number of listing pages the site has for this level.
    pub fn pages(&self) -> u32 {
        match self {
            Level::N1 => 7,
            Level::N2 => 5,
            Level::N3 => 5,
            Level::N4 => 4,
            Level::N5 => 3,
        }
    }

    /// URL of one listing page. Pages are numbered from 1.
    pub fn listing_url(&self, base_url: &str, page: u32) -> String {
        format!(
            "{}/jlpt-{}-grammar-list/page/{}/",
            base_url.trim_end_matches('/'),
            self.code(),
            page
        )
    }

    /// All listing page URLs for this level, in page order.
    pub fn listing_urls(&self, base_url: &str) -> Vec<(u32, String)> {
        (1..=self.pages())
            .map(|page| (page, self.listing_url(base_url, page)))
            .collect()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Level {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N1" => Ok(Level::N1),
            "N2" => Ok(Level::N2),
            "N3" => Ok(Level::N3),
            "N4" => Ok(Level::N4),
            "N5" => Ok(Level::N5),
            _ => Err(NotesError::InvalidLevel(s.to_string())),
        }
    }
}
