/// Playlist domain types
use crate::types::{Candidate, Song};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A local playlist
///
/// The name is the join key against remote playlists (exact, case-sensitive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Songs in playlist order
    pub songs: Vec<Song>,
}

impl Playlist {
    /// Create a new playlist
    pub fn new(name: impl Into<String>, songs: Vec<Song>) -> Self {
        Self {
            name: name.into(),
            songs,
        }
    }

    /// Resolved identifiers in playlist order
    pub fn resolved_uris(&self) -> impl Iterator<Item = &str> {
        self.songs.iter().filter_map(Song::resolved_uri)
    }

    /// Songs that have not been searched for yet
    pub fn pending(&self) -> usize {
        self.songs.iter().filter(|s| s.uri.is_not_attempted()).count()
    }
}

/// A playlist on the remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePlaylist {
    /// Remote playlist identifier
    pub id: String,

    /// Playlist name
    pub name: String,

    /// Current tracks in remote order
    pub tracks: Vec<Candidate>,
}

impl RemotePlaylist {
    /// Create a new remote playlist
    pub fn new(id: impl Into<String>, name: impl Into<String>, tracks: Vec<Candidate>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tracks,
        }
    }

    /// Identifiers of the current tracks
    pub fn track_ids(&self) -> HashSet<&str> {
        self.tracks.iter().map(|t| t.id.as_str()).collect()
    }
}
