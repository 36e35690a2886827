//! Domain types for Syncify
//!
//! - `song`: locally tagged songs and their three-state remote identifier
//! - `candidate`: read-only catalog search results
//! - `playlist`: local and remote playlists, joined by name

mod candidate;
mod playlist;
mod song;

pub use candidate::Candidate;
pub use playlist::{Playlist, RemotePlaylist};
pub use song::{Song, UriState};
