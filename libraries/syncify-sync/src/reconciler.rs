//! Repairs stale remote identifiers
//!
//! Catalogs relink tracks: the same recording can end up under a new
//! identifier while the old one still resolves locally. When a song's
//! resolved identifier is absent from its remote playlist, the remote
//! playlist's own tracks are searched for one with a matching title that no
//! local song has claimed yet.

use crate::types::UriUpdate;
use std::collections::{HashMap, HashSet};
use syncify_core::{Playlist, RemotePlaylist, UriState};
use syncify_matcher::normalize::{contains_all_tokens, normalize, FieldKind};
use tracing::{debug, info};

/// Replace stale identifiers with the remote playlist's own tracks
///
/// Only playlists present in `remote` and songs with a resolved identifier
/// are touched. A remote track is handed to at most one local song.
pub fn update_uris(
    playlists: &mut [Playlist],
    remote: &HashMap<String, RemotePlaylist>,
) -> Vec<UriUpdate> {
    let mut updates = Vec::new();

    for playlist in playlists.iter_mut() {
        let Some(remote_playlist) = remote.get(&playlist.name) else {
            continue;
        };

        let remote_ids = remote_playlist.track_ids();
        let track_titles: Vec<String> = remote_playlist
            .tracks
            .iter()
            .map(|track| normalize(&track.title, FieldKind::Title))
            .collect();

        let mut claimed: HashSet<String> =
            playlist.resolved_uris().map(str::to_string).collect();
        let before = updates.len();

        for song in &mut playlist.songs {
            let Some(old_uri) = song.resolved_uri().map(str::to_string) else {
                continue;
            };
            if remote_ids.contains(old_uri.as_str()) {
                continue;
            }

            let title = normalize(&song.title, FieldKind::Title);
            let replacement = remote_playlist
                .tracks
                .iter()
                .zip(&track_titles)
                .find(|(track, track_title)| {
                    !claimed.contains(&track.id) && contains_all_tokens(&title, track_title)
                })
                .map(|(track, _)| track.id.clone());

            let Some(new_uri) = replacement else {
                debug!("No replacement for '{}' in '{}'", song.title, playlist.name);
                continue;
            };

            claimed.insert(new_uri.clone());
            song.old_uri = Some(old_uri.clone());
            song.uri = UriState::Resolved(new_uri.clone());

            updates.push(UriUpdate {
                playlist: playlist.name.clone(),
                position: song.position,
                path: song.path.clone(),
                title: song.title.clone(),
                old_uri,
                new_uri,
            });
        }

        info!(
            "Updated {} URIs from remote playlist '{}'",
            updates.len() - before,
            playlist.name
        );
    }

    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use syncify_core::{Candidate, Song};

    fn remote(name: &str, tracks: Vec<Candidate>) -> HashMap<String, RemotePlaylist> {
        HashMap::from([(name.to_string(), RemotePlaylist::new("p1", name, tracks))])
    }

    #[test]
    fn test_stale_uri_is_replaced() {
        let mut playlists = vec![Playlist::new(
            "Mix",
            vec![Song::new("Song (Remastered)", "A", "")
                .with_position(3)
                .with_uri(UriState::Resolved("old".into()))],
        )];
        let remote = remote("Mix", vec![Candidate::new("new", "Song - 2011 Remaster")]);

        let updates = update_uris(&mut playlists, &remote);

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].position, 3);
        assert_eq!(updates[0].old_uri, "old");
        assert_eq!(updates[0].new_uri, "new");
        let song = &playlists[0].songs[0];
        assert_eq!(song.resolved_uri(), Some("new"));
        assert_eq!(song.old_uri.as_deref(), Some("old"));
    }

    #[test]
    fn test_present_and_unresolved_are_untouched() {
        let mut playlists = vec![Playlist::new(
            "Mix",
            vec![
                Song::new("Song", "A", "").with_uri(UriState::Resolved("1".into())),
                Song::new("Song", "A", "").with_uri(UriState::Unresolved),
                Song::new("Song", "A", ""),
            ],
        )];
        let remote = remote(
            "Mix",
            vec![Candidate::new("1", "Song"), Candidate::new("2", "Song")],
        );

        assert!(update_uris(&mut playlists, &remote).is_empty());
        assert_eq!(playlists[0].songs[1].uri, UriState::Unresolved);
        assert_eq!(playlists[0].songs[2].uri, UriState::NotAttempted);
    }

    #[test]
    fn test_playlist_without_remote_is_skipped() {
        let mut playlists = vec![Playlist::new(
            "Local Only",
            vec![Song::new("Song", "A", "").with_uri(UriState::Resolved("old".into()))],
        )];
        assert!(update_uris(&mut playlists, &HashMap::new()).is_empty());
    }
}
