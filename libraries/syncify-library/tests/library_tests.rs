//! Playlist loading and URI store persistence against a temp directory

use std::fs;
use std::path::Path;
use syncify_core::{LibrarySettings, Playlist, Song, TagReader, UriState};
use syncify_library::{
    load_library, load_playlists, missing_uris, LibraryError, LibraryFilter, PathRewrite, UriStore,
};
use tempfile::TempDir;

/// Derives songs from file names, refusing anything that is not audio
struct FileNameReader;

impl TagReader for FileNameReader {
    fn read(&self, path: &Path, position: usize) -> Option<Song> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        if !matches!(ext.as_str(), "flac" | "mp3" | "m4a" | "wma") {
            return None;
        }

        let album = path.parent()?.file_name()?.to_str()?.to_string();
        let title = path.file_stem()?.to_str()?.to_string();
        Some(
            Song::new(title, "Artist", album)
                .with_position(position)
                .with_path(path),
        )
    }
}

fn write_playlist(dir: &Path, name: &str, lines: &[&str]) {
    fs::write(dir.join(format!("{name}.m3u")), lines.join("\n")).unwrap();
}

fn playlist_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_playlist(
        dir.path(),
        "Road Trip",
        &[
            "#EXTM3U",
            "D:\\Music\\Album X\\01 Song.flac",
            "D:\\Music\\Album X\\cover.jpg",
            "D:\\Music\\Album Y\\02 Other.mp3",
        ],
    );
    write_playlist(dir.path(), "Chill", &["/music/Album Z/03 Calm.flac"]);
    fs::write(dir.path().join("notes.txt"), "not a playlist").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    write_playlist(&dir.path().join("nested"), "Hidden", &["/music/a/b.flac"]);
    dir
}

fn rewrite() -> PathRewrite {
    PathRewrite::from_settings(&LibrarySettings {
        music_path: "/music".to_string(),
        other_paths: vec!["D:\\Music".to_string()],
        ..LibrarySettings::default()
    })
}

#[test]
fn test_load_playlists_sorted_and_rewritten() {
    let dir = playlist_dir();
    let playlists = load_playlists(dir.path(), &FileNameReader, &rewrite(), None).unwrap();

    let names: Vec<&str> = playlists.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Chill", "Road Trip"]);

    let road_trip = &playlists[1];
    assert_eq!(road_trip.songs.len(), 2);
    assert_eq!(road_trip.songs[0].path, Path::new("/music/Album X/01 Song.flac"));
    assert_eq!(road_trip.songs[0].album, "Album X");
    assert_eq!(road_trip.songs[1].position, 2);
    assert!(road_trip.songs.iter().all(|s| s.uri.is_not_attempted()));
}

#[test]
fn test_load_playlists_filter() {
    let dir = playlist_dir();
    let filter = vec!["Chill".to_string()];
    let playlists = load_playlists(dir.path(), &FileNameReader, &rewrite(), Some(&filter)).unwrap();

    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].name, "Chill");
}

#[test]
fn test_load_playlists_missing_dir() {
    let dir = TempDir::new().unwrap();
    let result = load_playlists(&dir.path().join("absent"), &FileNameReader, &rewrite(), None);
    assert!(matches!(result, Err(LibraryError::InvalidPath(_))));
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

/// A music folder with three album folders and a playlist folder beside it
fn music_library() -> (TempDir, PathRewrite) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("music");

    touch(&root.join("Album A").join("01 One.flac"));
    touch(&root.join("Album A").join("02 Two.MP3"));
    touch(&root.join("Album A").join("cover.jpg"));
    touch(&root.join("Album B").join("03 Three.m4a"));
    touch(&root.join("Demos").join("rough.wma"));
    touch(&root.join("loose.flac"));

    let playlists = dir.path().join("playlists");
    fs::create_dir(&playlists).unwrap();
    write_playlist(&playlists, "Mix", &["D:\\Music\\Album A\\01 One.flac"]);

    let rewrite = PathRewrite::new(
        root.to_str().unwrap(),
        vec!["D:\\Music".to_string()],
    );
    (dir, rewrite)
}

fn folder_titles(folders: &[Playlist]) -> Vec<(String, Vec<String>)> {
    folders
        .iter()
        .map(|f| (f.name.clone(), f.songs.iter().map(|s| s.title.clone()).collect()))
        .collect()
}

#[test]
fn test_load_library_groups_by_folder() {
    let (dir, rewrite) = music_library();
    let root = dir.path().join("music");

    let folders =
        load_library(&root, &FileNameReader, &rewrite, &LibraryFilter::default()).unwrap();

    assert_eq!(
        folder_titles(&folders),
        vec![
            ("Album A".to_string(), vec!["01 One".to_string(), "02 Two".to_string()]),
            ("Album B".to_string(), vec!["03 Three".to_string()]),
            ("Demos".to_string(), vec!["rough".to_string()]),
        ]
    );
    assert_eq!(folders[0].songs[1].position, 1);
    assert_eq!(folders[0].songs[0].album, "Album A");
}

#[test]
fn test_load_library_excludes_folders_and_playlist_songs() {
    let (dir, rewrite) = music_library();
    let filter = LibraryFilter {
        ex_folders: vec!["Demos".to_string()],
        ex_playlists: Some(dir.path().join("playlists")),
        ..LibraryFilter::default()
    };

    let folders = load_library(&dir.path().join("music"), &FileNameReader, &rewrite, &filter).unwrap();

    assert_eq!(
        folder_titles(&folders),
        vec![
            ("Album A".to_string(), vec!["02 Two".to_string()]),
            ("Album B".to_string(), vec!["03 Three".to_string()]),
        ]
    );
    assert_eq!(folders[0].songs[0].position, 0);
}

#[test]
fn test_load_library_include_list() {
    let (dir, rewrite) = music_library();
    let filter = LibraryFilter {
        in_folders: vec!["Album B".to_string(), "Demos".to_string()],
        ex_folders: vec!["Demos".to_string()],
        ..LibraryFilter::default()
    };

    let folders = load_library(&dir.path().join("music"), &FileNameReader, &rewrite, &filter).unwrap();

    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0].name, "Album B");
}

#[test]
fn test_load_library_missing_root() {
    let dir = TempDir::new().unwrap();
    let result = load_library(
        &dir.path().join("absent"),
        &FileNameReader,
        &PathRewrite::default(),
        &LibraryFilter::default(),
    );
    assert!(matches!(result, Err(LibraryError::InvalidPath(_))));
}

fn searched_playlists() -> Vec<Playlist> {
    vec![Playlist::new(
        "Mix",
        vec![
            Song::new("Song", "Artist", "Album X")
                .with_path("/music/Album X/01 Song.flac")
                .with_uri(UriState::Resolved("track:1".into())),
            Song::new("Lost", "Artist", "Album X")
                .with_path("/music/Album X/02 Lost.flac")
                .with_uri(UriState::Unresolved),
        ],
    )]
}

fn fresh_playlists() -> Vec<Playlist> {
    vec![Playlist::new(
        "Other Mix",
        vec![
            Song::new("Song", "Artist", "Album X").with_path("/elsewhere/Album X/01 SONG.flac"),
            Song::new("Lost", "Artist", "Album X").with_path("/elsewhere/Album X/02 Lost.flac"),
            Song::new("New", "Artist", "Album X").with_path("/elsewhere/Album X/03 New.flac"),
        ],
    )]
}

#[test]
fn test_uri_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("URIs.json");

    let mut store = UriStore::load(&path).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.export(&searched_playlists()), 2);
    store.save(&path).unwrap();

    let loaded = UriStore::load(&path).unwrap();
    assert_eq!(loaded, store);

    let mut playlists = fresh_playlists();
    assert_eq!(loaded.import(&mut playlists, false), 1);

    let songs = &playlists[0].songs;
    assert_eq!(songs[0].resolved_uri(), Some("track:1"));
    assert_eq!(songs[1].uri, UriState::Unresolved);
    assert_eq!(songs[2].uri, UriState::NotAttempted);

    assert_eq!(missing_uris(&playlists, &[])["Other Mix"].len(), 1);
}

#[test]
fn test_uri_store_refresh() {
    let mut store = UriStore::new();
    store.export(&searched_playlists());

    let mut playlists = fresh_playlists();
    playlists[0].songs[0].uri = UriState::Resolved("track:stale".into());

    store.import(&mut playlists, false);
    assert_eq!(playlists[0].songs[0].resolved_uri(), Some("track:stale"));

    store.import(&mut playlists, true);
    assert_eq!(playlists[0].songs[0].resolved_uri(), Some("track:1"));
}

#[test]
fn test_saved_store_is_sorted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("URIs.json");

    let mut store = UriStore::new();
    store.export(&[Playlist::new(
        "Mix",
        vec![
            Song::new("b", "", "Beta").with_path("/m/Beta/b.flac").with_uri(UriState::Unresolved),
            Song::new("a", "", "Alpha").with_path("/m/Alpha/z.flac").with_uri(UriState::Unresolved),
            Song::new("a", "", "Alpha").with_path("/m/Alpha/a.flac").with_uri(UriState::Unresolved),
        ],
    )]);
    store.save(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let alpha = contents.find("Alpha").unwrap();
    let beta = contents.find("Beta").unwrap();
    assert!(alpha < beta);
    assert!(contents.find("\"a\"").unwrap() < contents.find("\"z\"").unwrap());
}
