//! Syncify Library
//!
//! The local side of a sync: m3u playlists on disk, a JSON cache of
//! previously resolved identifiers and the report of songs still missing.
//! Tag parsing itself is left to a [`TagReader`](syncify_core::TagReader).

mod error;
pub mod loader;
pub mod m3u;
pub mod report;
pub mod uri_store;

pub use error::{LibraryError, Result};
pub use loader::{load_library, load_playlists, LibraryFilter};
pub use m3u::{parse_m3u, PathRewrite};
pub use report::missing_uris;
pub use uri_store::UriStore;
