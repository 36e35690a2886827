/// Local song types
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::PathBuf;

/// Resolution state of a song's remote identifier
///
/// "Not attempted" and "attempted but not found" are different states: the
/// first means the song still needs a catalog search, the second means the
/// search ran and nothing qualified.
///
/// On the wire the state maps onto an optional JSON field: `NotAttempted` is
/// an absent key, `Unresolved` is `null` and `Resolved` is the identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum UriState {
    /// No resolution has been attempted yet
    #[default]
    NotAttempted,

    /// Resolution was attempted and no candidate qualified
    Unresolved,

    /// Resolved to a remote identifier
    Resolved(String),
}

impl UriState {
    /// Whether resolution has not been attempted yet
    pub fn is_not_attempted(&self) -> bool {
        matches!(self, UriState::NotAttempted)
    }

    /// Whether resolution was attempted, successful or not
    pub fn is_attempted(&self) -> bool {
        !self.is_not_attempted()
    }

    /// Whether resolution was attempted and failed
    pub fn is_unresolved(&self) -> bool {
        matches!(self, UriState::Unresolved)
    }

    /// The resolved identifier, if any
    pub fn as_resolved(&self) -> Option<&str> {
        match self {
            UriState::Resolved(uri) => Some(uri),
            _ => None,
        }
    }
}

impl From<Option<String>> for UriState {
    fn from(uri: Option<String>) -> Self {
        match uri {
            Some(uri) => UriState::Resolved(uri),
            None => UriState::Unresolved,
        }
    }
}

impl Serialize for UriState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            UriState::Resolved(uri) => serializer.serialize_some(uri),
            UriState::NotAttempted | UriState::Unresolved => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for UriState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<String>::deserialize(deserializer).map(UriState::from)
    }
}

/// A song read from a local playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Position in the source playlist (0-indexed)
    pub position: usize,

    /// Track title
    pub title: String,

    /// Track artist
    pub artist: String,

    /// Album name
    pub album: String,

    /// Track number on the album
    pub track: u32,

    /// Release year (0 = unknown)
    pub year: u32,

    /// Duration in seconds
    pub length: f64,

    /// Local file path
    pub path: PathBuf,

    /// Remote identifier resolution state
    #[serde(default, skip_serializing_if = "UriState::is_not_attempted")]
    pub uri: UriState,

    /// Identifier replaced during a re-match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_uri: Option<String>,
}

impl Song {
    /// Create a new song with unknown track number, year, length and path
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Self {
        Self {
            position: 0,
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            track: 0,
            year: 0,
            length: 0.0,
            path: PathBuf::new(),
            uri: UriState::NotAttempted,
            old_uri: None,
        }
    }

    /// Set the playlist position
    #[must_use]
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Set the track number
    #[must_use]
    pub fn with_track(mut self, track: u32) -> Self {
        self.track = track;
        self
    }

    /// Set the release year
    #[must_use]
    pub fn with_year(mut self, year: u32) -> Self {
        self.year = year;
        self
    }

    /// Set the duration in seconds
    #[must_use]
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Set the local file path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the resolution state
    #[must_use]
    pub fn with_uri(mut self, uri: UriState) -> Self {
        self.uri = uri;
        self
    }

    /// The resolved identifier, if any
    pub fn resolved_uri(&self) -> Option<&str> {
        self.uri.as_resolved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_state_predicates() {
        assert!(UriState::NotAttempted.is_not_attempted());
        assert!(UriState::Unresolved.is_attempted());
        assert!(UriState::Unresolved.is_unresolved());
        assert_eq!(UriState::Resolved("a".into()).as_resolved(), Some("a"));
        assert_eq!(UriState::Unresolved.as_resolved(), None);
    }

    #[test]
    fn test_absent_null_and_value_stay_distinct() {
        let base = r#""position":0,"title":"t","artist":"a","album":"b","track":1,"year":0,"length":1.0,"path":"x.mp3""#;

        let absent: Song = serde_json::from_str(&format!("{{{}}}", base)).unwrap();
        let null: Song = serde_json::from_str(&format!("{{{},\"uri\":null}}", base)).unwrap();
        let value: Song = serde_json::from_str(&format!("{{{},\"uri\":\"track:1\"}}", base)).unwrap();

        assert_eq!(absent.uri, UriState::NotAttempted);
        assert_eq!(null.uri, UriState::Unresolved);
        assert_eq!(value.uri, UriState::Resolved("track:1".to_string()));
    }

    #[test]
    fn test_serialize_skips_not_attempted() {
        let song = Song::new("t", "a", "b");
        let json = serde_json::to_value(&song).unwrap();
        assert!(json.get("uri").is_none());

        let song = song.with_uri(UriState::Unresolved);
        let json = serde_json::to_value(&song).unwrap();
        assert!(json.get("uri").unwrap().is_null());
    }
}
