//! What a remote playlist is missing

use std::collections::HashSet;
use syncify_core::{Playlist, RemotePlaylist};

/// Tracks to add to one remote playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistDiff {
    /// Playlist name
    pub name: String,

    /// The remote playlist does not exist yet
    pub create: bool,

    /// Resolved identifiers absent remotely, in local order
    pub to_append: Vec<String>,
}

impl PlaylistDiff {
    /// Compare a local playlist with its remote counterpart, if any
    ///
    /// Only resolved songs take part. An absent remote playlist counts as
    /// empty and must be created.
    pub fn compute(local: &Playlist, remote: Option<&RemotePlaylist>) -> Self {
        let existing: HashSet<&str> = remote.map(RemotePlaylist::track_ids).unwrap_or_default();

        let to_append = local
            .resolved_uris()
            .filter(|uri| !existing.contains(uri))
            .map(str::to_string)
            .collect();

        Self {
            name: local.name.clone(),
            create: remote.is_none(),
            to_append,
        }
    }

    /// Nothing to create and nothing to append
    pub fn is_empty(&self) -> bool {
        !self.create && self.to_append.is_empty()
    }

    /// The identifiers to append, in chunks of at most `size`
    pub fn batches(&self, size: usize) -> impl Iterator<Item = &[String]> {
        batches(&self.to_append, size)
    }
}

/// Split identifiers into ordered chunks of at most `size`
///
/// An empty list yields no chunks. A `size` of zero is treated as one.
pub fn batches(uris: &[String], size: usize) -> impl Iterator<Item = &[String]> {
    uris.chunks(size.max(1))
}
