use std::collections::BTreeMap;
use syncify_core::{Playlist, Song};

/// Songs still unresolved after searching, by playlist
///
/// Playlists named in `ignore` and playlists without unresolved songs are
/// left out. Album collections from `load_library` work the same way.
pub fn missing_uris(playlists: &[Playlist], ignore: &[String]) -> BTreeMap<String, Vec<Song>> {
    playlists
        .iter()
        .filter(|playlist| !ignore.contains(&playlist.name))
        .filter_map(|playlist| {
            let missing: Vec<Song> = playlist
                .songs
                .iter()
                .filter(|song| song.uri.is_unresolved())
                .cloned()
                .collect();
            (!missing.is_empty()).then(|| (playlist.name.clone(), missing))
        })
        .collect()
}
