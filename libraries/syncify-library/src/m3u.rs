//! m3u playlist parsing
//!
//! Playlists are often written on another machine, so entries may point at a
//! different music root with different path separators. When the first entry
//! starts with a known foreign root, that root is swapped for the local one
//! in every entry.

use std::path::PathBuf;
use syncify_core::LibrarySettings;

/// Maps music roots of other machines onto the local one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathRewrite {
    /// Music root on this machine
    pub local_root: String,

    /// Music roots that may appear in playlists written elsewhere
    pub foreign_roots: Vec<String>,
}

impl PathRewrite {
    pub fn new(local_root: impl Into<String>, foreign_roots: Vec<String>) -> Self {
        Self {
            local_root: local_root.into(),
            foreign_roots,
        }
    }

    pub fn from_settings(settings: &LibrarySettings) -> Self {
        Self::new(settings.music_path.clone(), settings.other_paths.clone())
    }

    /// The foreign root a playlist was written against, judged by its first entry
    fn detect<'a>(&'a self, first: &str) -> Option<&'a str> {
        if self.local_root.is_empty() {
            return None;
        }

        self.foreign_roots
            .iter()
            .map(String::as_str)
            .filter(|root| !root.is_empty())
            .find(|root| first.starts_with(root))
    }

    fn apply(&self, entry: &str, foreign: &str) -> String {
        let rewritten = match entry.strip_prefix(foreign) {
            Some(rest) => format!("{}{}", self.local_root, rest),
            None => entry.to_string(),
        };

        if self.local_root.contains('/') {
            rewritten.replace('\\', "/")
        } else {
            rewritten.replace('/', "\\")
        }
    }
}

/// Song paths listed in an m3u playlist, in order
///
/// Blank lines and `#` directives are skipped.
pub fn parse_m3u(contents: &str, rewrite: &PathRewrite) -> Vec<PathBuf> {
    let entries: Vec<&str> = contents
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .collect();

    let foreign = entries.first().and_then(|first| rewrite.detect(first));

    entries
        .into_iter()
        .map(|entry| match foreign {
            Some(foreign) => PathBuf::from(rewrite.apply(entry, foreign)),
            None => PathBuf::from(entry),
        })
        .collect()
}
