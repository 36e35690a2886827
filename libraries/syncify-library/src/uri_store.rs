//! Persistent identifier cache
//!
//! Stored as JSON, keyed by album and then by lower-cased file stem:
//!
//! ```json
//! {
//!   "Album X": {
//!     "01 song": "spotify:track:1",
//!     "02 lost": null
//!   }
//! }
//! ```
//!
//! `null` records a search that found nothing, so the song is not searched
//! again.

use crate::Result;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::Path;
use syncify_core::{Playlist, Song, UriState};
use tracing::info;

/// Album name to file key to identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct UriStore {
    albums: BTreeMap<String, BTreeMap<String, Option<String>>>,
}

/// Albums are written in case-insensitive order, ties broken byte-wise
impl Serialize for UriStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut albums: Vec<_> = self.albums.iter().collect();
        albums.sort_by_cached_key(|(album, _)| (album.to_lowercase(), (*album).clone()));
        serializer.collect_map(albums)
    }
}

/// Lookup key of a song inside its album: the lower-cased file stem
fn file_key(song: &Song) -> Option<String> {
    song.path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.trim().to_lowercase())
}

impl UriStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from disk; a missing file is an empty store
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&contents)?;
        info!("Loaded {} stored URIs from {}", store.len(), path.display());
        Ok(store)
    }

    /// Write the store as pretty-printed JSON, creating parent folders
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("Saved {} URIs to {}", self.len(), path.display());
        Ok(())
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.albums.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored state for a song, if its album and file are known
    pub fn get(&self, song: &Song) -> Option<UriState> {
        let key = file_key(song)?;
        self.albums
            .get(&song.album)?
            .iter()
            .find(|(stored, _)| stored.trim().to_lowercase() == key)
            .map(|(_, uri)| UriState::from(uri.clone()))
    }

    /// Fill in identifiers for songs found in the store
    ///
    /// Songs that were already attempted keep their state unless `refresh`
    /// is set. Returns the number of resolved identifiers imported.
    pub fn import(&self, playlists: &mut [Playlist], refresh: bool) -> usize {
        let mut imported = 0;

        for song in playlists.iter_mut().flat_map(|p| p.songs.iter_mut()) {
            if song.uri.is_attempted() && !refresh {
                continue;
            }

            if let Some(uri) = self.get(song) {
                if uri.as_resolved().is_some() {
                    imported += 1;
                }
                song.uri = uri;
            }
        }

        info!("Imported {} URIs", imported);
        imported
    }

    /// Merge every attempted song into the store
    ///
    /// Returns the number of songs recorded.
    pub fn export(&mut self, playlists: &[Playlist]) -> usize {
        let mut recorded = 0;

        for song in playlists.iter().flat_map(|p| p.songs.iter()) {
            if song.uri.is_not_attempted() {
                continue;
            }
            let Some(key) = file_key(song) else {
                continue;
            };

            self.albums
                .entry(song.album.clone())
                .or_default()
                .insert(key, song.resolved_uri().map(str::to_string));
            recorded += 1;
        }

        recorded
    }
}
