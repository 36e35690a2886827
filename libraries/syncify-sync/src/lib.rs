//! Syncify Sync
//!
//! Brings remote playlists in line with local ones.
//!
//! - `reconciler`: swaps stale identifiers for the remote playlist's own tracks
//! - `diff`: which resolved songs a remote playlist is missing, and batching
//! - `SyncManager`: drives the remote reader and writer collaborators

pub mod diff;
pub mod reconciler;

mod manager;
mod types;

pub use diff::{batches, PlaylistDiff};
pub use manager::SyncManager;
pub use reconciler::update_uris;
pub use types::{FailedPlaylist, PlaylistSyncResult, SyncSummary, UriUpdate};
