//! Comparison keys for titles, artists and albums
//!
//! Normalization strips the annotations catalogs and taggers disagree on
//! (remix/edition brackets, featured artists, collaborator lists, leading
//! articles) and reduces the rest to lower-case alphanumeric tokens separated
//! by single spaces.
//!
//! Normalization is deterministic and idempotent. An empty key means
//! "unknown" and must never be used as a match signal.

use once_cell::sync::Lazy;
use regex::Regex;
use syncify_core::Song;

/// Bracketed or parenthesised spans, shortest match
static BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[(\[].*?[)\]]").unwrap());

/// Runs of anything outside the comparison alphabet
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9']+").unwrap());

const TITLE_SPLITS: &[&str] = &["feat.", "ft.", " / "];
const ARTIST_SPLITS: &[&str] = &[" feat.", " ft.", "&", " and ", " vs"];
const ALBUM_SPLITS: &[&str] = &["-"];

/// Which metadata field a string comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Track title
    Title,
    /// Artist name
    Artist,
    /// Album name
    Album,
}

/// Normalize a raw field into a comparison key
pub fn normalize(text: &str, kind: FieldKind) -> String {
    let mut key = normalize_once(text, kind);

    // A removal can expose another removable substring ("xthethe " -> "xthe ").
    // Every pass after the first only shortens the key, so this terminates.
    loop {
        let next = normalize_once(&key, kind);
        if next == key {
            return key;
        }
        key = next;
    }
}

fn normalize_once(text: &str, kind: FieldKind) -> String {
    let lowered = text.to_lowercase();
    let stripped = BRACKETS.replace_all(&lowered, "");

    let cleaned = match kind {
        FieldKind::Title => {
            let dropped = stripped.replace("part ", " ").replace("the ", " ");
            cut_at_first(&dropped, TITLE_SPLITS).replace("featuring", "")
        }
        FieldKind::Artist => {
            let dropped = stripped.replace("the ", " ");
            cut_at_first(&dropped, ARTIST_SPLITS).replace(" featuring", "")
        }
        FieldKind::Album => cut_at_first(&stripped, ALBUM_SPLITS)
            .replace("ep", "")
            .replace("the ", " "),
    };

    NON_WORD.replace_all(&cleaned, " ").trim().to_string()
}

/// Keep everything before the earliest separator
fn cut_at_first<'a>(text: &'a str, separators: &[&str]) -> &'a str {
    let end = separators
        .iter()
        .filter_map(|sep| text.find(sep))
        .min()
        .unwrap_or(text.len());
    &text[..end]
}

/// Whitespace tokens of a comparison key
pub fn tokens(key: &str) -> impl Iterator<Item = &str> {
    key.split(' ')
}

/// Whether every token of `key` occurs as a substring of `haystack`
///
/// An empty key carries no information and never matches.
pub fn contains_all_tokens(key: &str, haystack: &str) -> bool {
    !key.is_empty() && tokens(key).all(|token| haystack.contains(token))
}

/// Normalized title, artist and album of a song
///
/// Derived on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComparisonKey {
    /// Normalized title
    pub title: String,
    /// Normalized artist
    pub artist: String,
    /// Normalized album
    pub album: String,
}

impl ComparisonKey {
    /// Compute the comparison key of a song
    pub fn of(song: &Song) -> Self {
        Self {
            title: normalize(&song.title, FieldKind::Title),
            artist: normalize(&song.artist, FieldKind::Artist),
            album: normalize(&song.album, FieldKind::Album),
        }
    }

    /// A song without a usable title cannot be matched
    pub fn is_unknown(&self) -> bool {
        self.title.is_empty()
    }
}
