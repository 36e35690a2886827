use serde::Serialize;
use std::path::PathBuf;

/// A song whose remote identifier was replaced during reconciliation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UriUpdate {
    pub playlist: String,
    pub position: usize,
    pub path: PathBuf,
    pub title: String,
    pub old_uri: String,
    pub new_uri: String,
}

/// Outcome of syncing one playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistSyncResult {
    pub name: String,

    /// Whether the remote playlist had to be created
    pub created: bool,

    /// Number of identifiers appended
    pub appended: usize,
}

/// A playlist whose sync stopped on a collaborator failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedPlaylist {
    pub name: String,
    pub error: String,
}

/// Summary of a completed sync operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncSummary {
    pub playlists: Vec<PlaylistSyncResult>,
    pub failed: Vec<FailedPlaylist>,
    pub duration_ms: u64,
}

impl SyncSummary {
    /// Total identifiers appended across all playlists
    pub fn appended(&self) -> usize {
        self.playlists.iter().map(|p| p.appended).sum()
    }

    /// Number of playlists created remotely
    pub fn created(&self) -> usize {
        self.playlists.iter().filter(|p| p.created).count()
    }

    pub fn summary_text(&self) -> String {
        format!(
            "Sync complete: {} playlists updated ({} created), {} tracks added, {} failed in {}ms",
            self.playlists.len(),
            self.created(),
            self.appended(),
            self.failed.len(),
            self.duration_ms
        )
    }
}
