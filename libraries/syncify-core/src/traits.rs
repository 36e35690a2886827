/// Collaborator traits for Syncify
///
/// The matching engine and reconciler never touch the network or the disk
/// themselves. Everything that does is injected through these traits.
use crate::error::Result;
use crate::types::{Candidate, RemotePlaylist, Song};
use async_trait::async_trait;
use std::path::Path;

/// Catalog search
///
/// Implementers query the remote catalog and return candidates in relevance
/// order. An empty result is a normal outcome, not an error.
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    /// Search the catalog for a free-text query
    ///
    /// # Errors
    /// Returns an error if the remote call fails. Callers treat a failed
    /// search the same as an empty one.
    async fn search(&self, query: &str) -> Result<Vec<Candidate>>;
}

/// Tag reader
///
/// Implementers read audio file tags into a `Song`. Unreadable or unsupported
/// files yield `None` and are left out of the playlist.
pub trait TagReader: Send + Sync {
    /// Read a song from the given path
    ///
    /// `position` is the index of the entry in its source playlist.
    fn read(&self, path: &Path, position: usize) -> Option<Song>;
}

/// Remote playlist reader
#[async_trait]
pub trait PlaylistReader: Send + Sync {
    /// Fetch a remote playlist and its tracks by exact name
    ///
    /// Returns `None` when the user has no playlist with this name.
    async fn get_playlist(&self, name: &str) -> Result<Option<RemotePlaylist>>;
}

/// Remote playlist writer
#[async_trait]
pub trait PlaylistWriter: Send + Sync {
    /// Create an empty playlist and return its identifier
    async fn create_playlist(&self, name: &str) -> Result<String>;

    /// Append tracks to a playlist
    ///
    /// Implementations must accept an empty list as a no-op.
    async fn append_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<()>;
}
