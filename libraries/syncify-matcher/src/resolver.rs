//! Drives catalog searches through the query plan and the scorer

use crate::normalize::ComparisonKey;
use crate::query::QueryPlan;
use crate::scorer::Matcher;
use crate::types::{PlaylistSearch, Resolution, SearchReport};
use syncify_core::{Candidate, CatalogSearch, MatchConfig, Playlist, Song, UriState};
use tracing::{debug, info, warn};

/// Resolves songs against a remote catalog
pub struct SongResolver<C> {
    catalog: C,
    matcher: Matcher,
}

impl<C: CatalogSearch> SongResolver<C> {
    /// Create a new resolver
    pub fn new(catalog: C, config: MatchConfig) -> Self {
        Self {
            catalog,
            matcher: Matcher::new(config),
        }
    }

    /// The scorer used for match decisions
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// A failed search counts as an empty one
    async fn search(&self, query: &str) -> Vec<Candidate> {
        match self.catalog.search(query).await {
            Ok(results) => results,
            Err(e) => {
                warn!("Catalog search failed for '{}': {}", query, e);
                Vec::new()
            }
        }
    }

    /// Search the catalog for one song and resolve it
    ///
    /// Runs the query plan until a query returns candidates. If no strong match
    /// is found in those, the title-only query is searched as well before
    /// falling back to weak matching.
    pub async fn resolve_song(&self, song: &mut Song) -> Resolution {
        let key = ComparisonKey::of(song);
        if key.is_unknown() {
            debug!("No usable title for {}, skipping", song.path.display());
            song.uri = UriState::Unresolved;
            return Resolution::Unresolved;
        }

        let mut plan = QueryPlan::new(&key, self.matcher.config());
        let mut results = Vec::new();
        let mut last_query = None;
        for query in plan.by_ref() {
            results = self.search(&query).await;
            last_query = Some(query);
            if !results.is_empty() {
                break;
            }
        }

        // The plan ends with the title-only query, so it may already be answered
        let results_title = if self.matcher.strong_match(song, &results).is_some() {
            Vec::new()
        } else {
            match plan.title_only() {
                Some(query) if last_query.as_ref() == Some(&query) => results.clone(),
                Some(query) => self.search(&query).await,
                None => Vec::new(),
            }
        };

        self.matcher.resolve(song, &results, &results_title)
    }

    /// Search for every song that has not been attempted yet
    ///
    /// Songs already resolved or already marked unresolved are left alone.
    /// Playlists with nothing to search are skipped.
    pub async fn search_all(&self, playlists: &mut [Playlist]) -> SearchReport {
        let mut report = SearchReport::default();

        for playlist in playlists.iter_mut() {
            let pending = playlist.pending();
            if pending == 0 {
                debug!("Nothing to search in '{}'", playlist.name);
                continue;
            }

            info!("Searching {} songs in '{}'", pending, playlist.name);

            let mut matched = 0;
            for song in playlist.songs.iter_mut().filter(|s| s.uri.is_not_attempted()) {
                if self.resolve_song(song).await.is_match() {
                    matched += 1;
                }
            }

            let missing: Vec<Song> = playlist
                .songs
                .iter()
                .filter(|s| s.uri.is_unresolved())
                .cloned()
                .collect();

            info!(
                "'{}': {}/{} matched, {} missing",
                playlist.name,
                matched,
                pending,
                missing.len()
            );

            report.playlists.push(PlaylistSearch {
                name: playlist.name.clone(),
                searched: pending,
                matched,
                missing,
            });
        }

        info!("{}", report.summary_text());
        report
    }
}
