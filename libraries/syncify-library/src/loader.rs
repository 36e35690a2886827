//! Loads songs from a folder of m3u files or from the whole music folder

use crate::m3u::{parse_m3u, PathRewrite};
use crate::{LibraryError, Result};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use syncify_core::{Playlist, Song, TagReader};
use tracing::{debug, info};
use walkdir::WalkDir;

const PLAYLIST_EXTENSION: &str = "m3u";

/// Audio file extensions picked up by a library scan
const AUDIO_EXTENSIONS: &[&str] = &["flac", "mp3", "m4a", "wma"];

/// Which songs a library scan keeps
///
/// Folder names are the immediate parent folder of each file, which is
/// taken as the album.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryFilter {
    /// Only keep songs in these folders (all folders when empty)
    pub in_folders: Vec<String>,

    /// Drop songs in these folders
    pub ex_folders: Vec<String>,

    /// Drop songs listed in any m3u playlist in this folder
    pub ex_playlists: Option<PathBuf>,
}

impl LibraryFilter {
    fn keeps_folder(&self, folder: &str) -> bool {
        !self.ex_folders.iter().any(|f| f == folder)
            && (self.in_folders.is_empty() || self.in_folders.iter().any(|f| f == folder))
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(LibraryError::InvalidPath(format!(
            "{} is not a directory",
            dir.display()
        )))
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// `*.m3u` files directly inside `dir`, sorted by file name
fn playlist_files(dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir(dir)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), &[PLAYLIST_EXTENSION]) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Load every `*.m3u` playlist directly inside `dir`, sorted by file name
///
/// The playlist name is the file stem. When `filter` is given, only
/// playlists named in it are loaded. Entries the tag reader cannot read are
/// left out, while the remaining songs keep their line position.
pub fn load_playlists(
    dir: &Path,
    reader: &dyn TagReader,
    rewrite: &PathRewrite,
    filter: Option<&[String]>,
) -> Result<Vec<Playlist>> {
    let mut playlists = Vec::new();

    for path in playlist_files(dir)? {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        if filter.is_some_and(|names| !names.iter().any(|n| n == name)) {
            debug!("Skipping playlist '{}'", name);
            continue;
        }

        let contents = std::fs::read_to_string(&path)?;
        let entries = parse_m3u(&contents, rewrite);
        let total = entries.len();

        let songs: Vec<_> = entries
            .iter()
            .enumerate()
            .filter_map(|(position, song_path)| reader.read(song_path, position))
            .collect();

        if songs.len() < total {
            debug!(
                "'{}': {} of {} entries could not be read",
                name,
                total - songs.len(),
                total
            );
        }

        playlists.push(Playlist::new(name, songs));
    }

    info!("Loaded {} playlists from {}", playlists.len(), dir.display());
    Ok(playlists)
}

/// Every song path listed in the m3u playlists inside `dir`
fn listed_paths(dir: &Path, rewrite: &PathRewrite) -> Result<HashSet<PathBuf>> {
    let mut listed = HashSet::new();
    for path in playlist_files(dir)? {
        let contents = std::fs::read_to_string(&path)?;
        listed.extend(parse_m3u(&contents, rewrite));
    }
    Ok(listed)
}

/// Load every audio file under `root`, grouped by parent folder
///
/// Only files inside a subfolder of `root` are considered. Groups are
/// returned sorted by folder name and songs within a group by path, with
/// `position` counting from zero in each group. `rewrite` maps the entries
/// of excluded playlists onto `root` the same way `load_playlists` does.
pub fn load_library(
    root: &Path,
    reader: &dyn TagReader,
    rewrite: &PathRewrite,
    filter: &LibraryFilter,
) -> Result<Vec<Playlist>> {
    ensure_dir(root)?;

    let excluded = match &filter.ex_playlists {
        Some(dir) => listed_paths(dir, rewrite)?,
        None => HashSet::new(),
    };

    let mut folders: BTreeMap<String, Vec<Song>> = BTreeMap::new();
    let mut skipped = 0;

    for entry in WalkDir::new(root).min_depth(2).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() || !has_extension(path, AUDIO_EXTENSIONS) {
            continue;
        }

        let Some(folder) = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
        else {
            continue;
        };

        if !filter.keeps_folder(folder) || excluded.contains(path) {
            skipped += 1;
            continue;
        }

        let songs = folders.entry(folder.to_string()).or_default();
        if let Some(song) = reader.read(path, songs.len()) {
            songs.push(song);
        }
    }

    debug!("Library scan skipped {} filtered songs", skipped);
    info!(
        "Loaded {} songs in {} folders from {}",
        folders.values().map(Vec::len).sum::<usize>(),
        folders.len(),
        root.display()
    );

    Ok(folders
        .into_iter()
        .filter(|(_, songs)| !songs.is_empty())
        .map(|(folder, songs)| Playlist::new(folder, songs))
        .collect())
}
