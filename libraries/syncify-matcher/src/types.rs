//! Common types for the matcher

use serde::Serialize;
use syncify_core::Song;

/// Which phase of the resolution order decided a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Strong match against the first non-empty query results
    Strong,

    /// Strong match against the title-only results
    StrongTitle,

    /// Weak match against the first non-empty query results
    Weak,

    /// Weak match against the title-only results, applied to the song
    WeakTitle,

    /// Weak match against the title-only results, found but not applied
    Discarded,

    /// Nothing qualified
    Unresolved,
}

impl Resolution {
    /// Whether the song ended up with a resolved identifier
    pub fn is_match(self) -> bool {
        matches!(
            self,
            Resolution::Strong | Resolution::StrongTitle | Resolution::Weak | Resolution::WeakTitle
        )
    }
}

/// Search outcome for one playlist
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistSearch {
    /// Playlist name
    pub name: String,

    /// Number of songs searched for
    pub searched: usize,

    /// Number of songs resolved
    pub matched: usize,

    /// Songs still unresolved after searching
    pub missing: Vec<Song>,
}

/// Outcome of searching every playlist
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchReport {
    /// Per-playlist results, in processing order
    pub playlists: Vec<PlaylistSearch>,
}

impl SearchReport {
    /// Total songs searched for
    pub fn searched(&self) -> usize {
        self.playlists.iter().map(|p| p.searched).sum()
    }

    /// Total songs still missing
    pub fn missing(&self) -> usize {
        self.playlists.iter().map(|p| p.missing.len()).sum()
    }

    /// One-line summary for logs
    pub fn summary_text(&self) -> String {
        format!(
            "Search complete: {} songs searched across {} playlists, {} not found",
            self.searched(),
            self.playlists.len(),
            self.missing()
        )
    }
}
