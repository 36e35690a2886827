/// Core error types for Syncify
use thiserror::Error;

/// Result type alias using `SyncifyError`
pub type Result<T> = std::result::Result<T, SyncifyError>;

/// Core error type for Syncify
///
/// An unmatched song is never an error: "not found" is carried as data on the
/// song itself (`UriState::Unresolved`). These variants describe failures of
/// the collaborators around the matching engine.
#[derive(Error, Debug)]
pub enum SyncifyError {
    /// Catalog search failed
    #[error("Catalog search failed for '{query}': {message}")]
    Catalog { query: String, message: String },

    /// Remote playlist read or write failed
    #[error("Playlist '{name}' failed: {message}")]
    Playlist { name: String, message: String },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl SyncifyError {
    /// Create a catalog search error
    pub fn catalog(query: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Catalog {
            query: query.into(),
            message: msg.into(),
        }
    }

    /// Create a playlist error
    pub fn playlist(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Playlist {
            name: name.into(),
            message: msg.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<config::ConfigError> for SyncifyError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
