/// Catalog search result types
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// A remote catalog entry returned by a search
///
/// Candidates are read-only snapshots: they are created per search call and
/// discarded after scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque remote identifier
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist names, in catalog order
    pub artists: Vec<String>,

    /// Album name
    pub album: String,

    /// Album release year (0 = unknown)
    pub year: u32,

    /// Duration in seconds
    pub duration: f64,
}

impl Candidate {
    /// Create a new candidate with no artists, album, year or duration
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artists: Vec::new(),
            album: String::new(),
            year: 0,
            duration: 0.0,
        }
    }

    /// Append an artist
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artists.push(artist.into());
        self
    }

    /// Set the album name
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    /// Set the release year
    #[must_use]
    pub fn with_year(mut self, year: u32) -> Self {
        self.year = year;
        self
    }

    /// Set the duration in seconds
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Extract a 4-digit year from a catalog release date
    ///
    /// Accepts `"2020-03-01"`, `"2020"`, `"03/2020"` and the like: non-digits are
    /// dropped and the first four digits are kept. Returns 0 when no digits remain.
    pub fn release_year(date: &str) -> u32 {
        let digits = NON_DIGITS.replace_all(date, "");
        digits
            .get(..digits.len().min(4))
            .and_then(|year| year.parse().ok())
            .unwrap_or(0)
    }
}
