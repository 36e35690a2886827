/// Syncify configuration
///
/// Tuning constants are explicit values handed to the matcher and reconciler
/// at construction. `SyncifyConfig::load` layers an optional TOML file under
/// `SYNCIFY_`-prefixed environment variables, e.g. `SYNCIFY_SYNC__BATCH_SIZE=25`.
use crate::error::{Result, SyncifyError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncifyConfig {
    /// Matching engine settings
    #[serde(default)]
    pub matching: MatchConfig,

    /// Playlist sync settings
    #[serde(default)]
    pub sync: SyncConfig,

    /// Local library locations
    #[serde(default)]
    pub library: LibrarySettings,
}

/// Matching engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum duration difference for a strong-match time signal (seconds)
    #[serde(default = "default_time_tolerance")]
    pub time_tolerance_secs: f64,

    /// Starting ceiling of the weak-match running minimum (seconds)
    #[serde(default = "default_max_length_diff")]
    pub max_length_diff_secs: f64,

    /// Terms that mark karaoke or backing-track candidates
    #[serde(default = "default_excluded_terms")]
    pub excluded_terms: Vec<String>,

    /// Album key prefix of local-only folders never sent to the catalog
    #[serde(default = "default_local_album_prefix")]
    pub local_album_prefix: String,

    /// Apply the final weak match against title-only results instead of discarding it
    #[serde(default)]
    pub adopt_title_fallback: bool,
}

/// Playlist sync settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Maximum identifiers per append call
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

/// Local library locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySettings {
    /// Music root on this machine
    #[serde(default)]
    pub music_path: String,

    /// Music roots on other machines that may appear in playlist files
    #[serde(default)]
    pub other_paths: Vec<String>,

    /// Folder holding the m3u playlists
    #[serde(default = "default_playlists_path")]
    pub playlists_path: PathBuf,

    /// Folder for the URI store and reports
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// File stem of the URI store inside `data_path`
    #[serde(default = "default_uri_store_filename")]
    pub uri_store_filename: String,
}

impl SyncifyConfig {
    /// Load configuration from an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if path.exists() {
                settings = settings.add_source(config::File::from(path));
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SYNCIFY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.sync.batch_size == 0 {
            return Err(SyncifyError::config("sync.batch_size must be at least 1"));
        }

        if self.matching.time_tolerance_secs < 0.0 {
            return Err(SyncifyError::config(
                "matching.time_tolerance_secs must not be negative",
            ));
        }

        if self.matching.max_length_diff_secs <= 0.0 {
            return Err(SyncifyError::config(
                "matching.max_length_diff_secs must be positive",
            ));
        }

        // A blank term is contained in every string and would reject every candidate
        if self
            .matching
            .excluded_terms
            .iter()
            .any(|term| term.trim().is_empty())
        {
            return Err(SyncifyError::config(
                "matching.excluded_terms must not contain blank terms",
            ));
        }

        Ok(())
    }
}

impl LibrarySettings {
    /// Full path of the URI store file
    pub fn uri_store_path(&self) -> PathBuf {
        self.data_path
            .join(format!("{}.json", self.uri_store_filename))
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            time_tolerance_secs: default_time_tolerance(),
            max_length_diff_secs: default_max_length_diff(),
            excluded_terms: default_excluded_terms(),
            local_album_prefix: default_local_album_prefix(),
            adopt_title_fallback: false,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            music_path: String::new(),
            other_paths: Vec::new(),
            playlists_path: default_playlists_path(),
            data_path: default_data_path(),
            uri_store_filename: default_uri_store_filename(),
        }
    }
}

// Default values
fn default_time_tolerance() -> f64 {
    20.0
}

fn default_max_length_diff() -> f64 {
    600.0
}

fn default_excluded_terms() -> Vec<String> {
    vec!["karaoke".to_string(), "backing".to_string()]
}

fn default_local_album_prefix() -> String {
    "downloads".to_string()
}

fn default_batch_size() -> usize {
    50
}

fn default_playlists_path() -> PathBuf {
    PathBuf::from("./playlists")
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_uri_store_filename() -> String {
    "URIs".to_string()
}
