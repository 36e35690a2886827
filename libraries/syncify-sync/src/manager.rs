use crate::diff::PlaylistDiff;
use crate::reconciler;
use crate::types::{FailedPlaylist, PlaylistSyncResult, SyncSummary, UriUpdate};
use std::collections::HashMap;
use std::time::Instant;
use syncify_core::{Playlist, PlaylistReader, PlaylistWriter, RemotePlaylist, Result, SyncConfig};
use tracing::{debug, info, warn};

/// Pushes local playlists to the remote service
pub struct SyncManager<R, W> {
    reader: R,
    writer: W,
    config: SyncConfig,
}

impl<R: PlaylistReader, W: PlaylistWriter> SyncManager<R, W> {
    pub fn new(reader: R, writer: W, config: SyncConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Fetch the remote counterparts of the given playlists by name
    ///
    /// Playlists that fail to load are logged and left out.
    pub async fn fetch_remote(&self, playlists: &[Playlist]) -> HashMap<String, RemotePlaylist> {
        let mut remote = HashMap::new();

        for playlist in playlists {
            match self.reader.get_playlist(&playlist.name).await {
                Ok(Some(found)) => {
                    remote.insert(playlist.name.clone(), found);
                }
                Ok(None) => debug!("No remote playlist named '{}'", playlist.name),
                Err(e) => warn!("Failed to fetch remote playlist '{}': {}", playlist.name, e),
            }
        }

        remote
    }

    /// Replace stale identifiers using the current remote playlists
    pub async fn update_uris(&self, playlists: &mut [Playlist]) -> Vec<UriUpdate> {
        let remote = self.fetch_remote(playlists).await;
        reconciler::update_uris(playlists, &remote)
    }

    /// Add every missing resolved song to its remote playlist
    ///
    /// Playlists are handled in order. A remote playlist is created when
    /// absent. A failure stops that playlist only.
    pub async fn sync(&self, playlists: &[Playlist]) -> SyncSummary {
        let start_time = Instant::now();
        let mut summary = SyncSummary::default();

        for playlist in playlists {
            match self.sync_playlist(playlist).await {
                Ok(result) => {
                    info!(
                        "'{}': added {} tracks{}",
                        result.name,
                        result.appended,
                        if result.created { " to new playlist" } else { "" }
                    );
                    summary.playlists.push(result);
                }
                Err(e) => {
                    warn!("Failed to sync playlist '{}': {}", playlist.name, e);
                    summary.failed.push(FailedPlaylist {
                        name: playlist.name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        summary.duration_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!("{}", summary.summary_text());
        summary
    }

    async fn sync_playlist(&self, playlist: &Playlist) -> Result<PlaylistSyncResult> {
        let remote = self.reader.get_playlist(&playlist.name).await?;
        let diff = PlaylistDiff::compute(playlist, remote.as_ref());

        let playlist_id = match remote {
            Some(remote) => remote.id,
            None => {
                debug!("Creating remote playlist '{}'", playlist.name);
                self.writer.create_playlist(&playlist.name).await?
            }
        };

        for batch in diff.batches(self.config.batch_size) {
            self.writer.append_tracks(&playlist_id, batch).await?;
        }

        Ok(PlaylistSyncResult {
            name: diff.name,
            created: diff.create,
            appended: diff.to_append.len(),
        })
    }
}
