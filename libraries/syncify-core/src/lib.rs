//! Syncify Core
//!
//! Shared domain types, collaborator traits and error handling for Syncify.
//!
//! Every other crate in the workspace builds on the building blocks defined here.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `UriState`, `Candidate`, `Playlist`, `RemotePlaylist`
//! - **Collaborator Traits**: `CatalogSearch`, `TagReader`, `PlaylistReader`, `PlaylistWriter`
//! - **Configuration**: `SyncifyConfig` with matching, sync and library settings
//! - **Error Handling**: Unified `SyncifyError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use syncify_core::types::{Candidate, Song, UriState};
//!
//! let mut song = Song::new("Song (Live)", "Artist A", "downloads")
//!     .with_length(200.0)
//!     .with_year(2020);
//! assert!(song.uri.is_not_attempted());
//!
//! let candidate = Candidate::new("track:1", "Song")
//!     .with_artist("Artist A")
//!     .with_duration(205.0);
//! song.uri = UriState::Resolved(candidate.id.clone());
//! assert_eq!(song.resolved_uri(), Some("track:1"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{LibrarySettings, MatchConfig, SyncConfig, SyncifyConfig};
pub use error::{Result, SyncifyError};
pub use traits::{CatalogSearch, PlaylistReader, PlaylistWriter, TagReader};
pub use types::{Candidate, Playlist, RemotePlaylist, Song, UriState};
