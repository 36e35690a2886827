//! Candidate scoring
//!
//! Two decision procedures compare a song against a candidate list:
//!
//! - **Strong match**: first candidate (in catalog order) with any single
//!   corroborating signal among duration, album and year. High recall, low
//!   precision.
//! - **Weak match**: token containment on title or artist, keeping the
//!   candidate with the smallest duration difference across the whole list.
//!
//! Both reject karaoke and backing-track candidates outright.

use crate::normalize::{contains_all_tokens, normalize, ComparisonKey, FieldKind};
use crate::types::Resolution;
use syncify_core::{Candidate, MatchConfig, Song, UriState};
use tracing::debug;

/// Scores candidates against songs
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl Matcher {
    /// Create a new matcher
    pub fn new(mut config: MatchConfig) -> Self {
        for term in &mut config.excluded_terms {
            *term = term.to_lowercase();
        }
        Self { config }
    }

    /// Matching settings in use
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn is_excluded(&self, text: &str) -> bool {
        self.config
            .excluded_terms
            .iter()
            .any(|term| text.contains(term.as_str()))
    }

    fn album_excluded(&self, candidate: &Candidate) -> bool {
        self.is_excluded(&candidate.album.to_lowercase())
    }

    fn artist_excluded(&self, name: &str) -> bool {
        self.is_excluded(&normalize(name, FieldKind::Artist)) || self.is_excluded(&name.to_lowercase())
    }

    /// Karaoke guard: false if the album or any artist marks a karaoke or
    /// backing-track version
    pub fn passes_guard(&self, candidate: &Candidate) -> bool {
        !self.album_excluded(candidate)
            && !candidate.artists.iter().any(|name| self.artist_excluded(name))
    }

    /// First candidate with at least one of the duration, album or year signals
    pub fn strong_match<'c>(&self, song: &Song, candidates: &'c [Candidate]) -> Option<&'c Candidate> {
        let album = song.album.to_lowercase();

        candidates.iter().find(|candidate| {
            if !self.passes_guard(candidate) {
                return false;
            }

            let time_match = song.length > 0.0
                && (candidate.duration - song.length).abs() <= self.config.time_tolerance_secs;
            let album_match = !album.is_empty() && candidate.album.to_lowercase().contains(&album);
            let year_match = song.year != 0 && song.year == candidate.year;

            time_match || album_match || year_match
        })
    }

    /// Title or artist match with the smallest duration difference
    ///
    /// `artist_match` starts out true and is only overwritten by artists
    /// examined before the loop stops. The loop stops at the first matching
    /// artist or at the first artist tripping the karaoke guard, so a
    /// candidate whose first artist trips the guard keeps the initial value.
    /// Acceptance still requires the guard to pass for the whole candidate.
    pub fn weak_match<'c>(
        &self,
        song: &Song,
        candidates: &'c [Candidate],
        title_key: &str,
        artist_key: &str,
    ) -> Option<&'c Candidate> {
        let mut best = None;
        let mut min_length_diff = self.config.max_length_diff_secs;

        for candidate in candidates {
            let candidate_title = normalize(&candidate.title, FieldKind::Title);
            let title_match = contains_all_tokens(title_key, &candidate_title);
            let length_diff = (candidate.duration - song.length).abs();

            let mut artist_match = true;

            for name in &candidate.artists {
                if self.artist_excluded(name) {
                    break;
                }

                let artist_name = normalize(name, FieldKind::Artist);
                artist_match = contains_all_tokens(artist_key, &artist_name);
                if artist_match {
                    break;
                }
            }

            if (artist_match || title_match)
                && length_diff < min_length_diff
                && self.passes_guard(candidate)
            {
                min_length_diff = length_diff;
                best = Some(candidate);
            }
        }

        best
    }

    /// Resolve a song against the first non-empty query results and the
    /// title-only results
    ///
    /// Tries, in order: strong on `results`, strong on `results_title`, weak on
    /// `results`, weak on `results_title`. The last attempt is best-effort and
    /// its outcome is discarded unless `adopt_title_fallback` is set.
    ///
    /// The song always leaves this call attempted: `Resolved` on a match,
    /// `Unresolved` otherwise.
    pub fn resolve(
        &self,
        song: &mut Song,
        results: &[Candidate],
        results_title: &[Candidate],
    ) -> Resolution {
        let key = ComparisonKey::of(song);
        if key.is_unknown() {
            debug!(path = %song.path.display(), "Song has no usable title, skipping");
            song.uri = UriState::Unresolved;
            return Resolution::Unresolved;
        }

        let (resolution, matched) = if let Some(c) = self.strong_match(song, results) {
            (Resolution::Strong, Some(c))
        } else if let Some(c) = self.strong_match(song, results_title) {
            (Resolution::StrongTitle, Some(c))
        } else if let Some(c) = self.weak_match(song, results, &key.title, &key.artist) {
            (Resolution::Weak, Some(c))
        } else if let Some(c) = self.weak_match(song, results_title, &key.title, &key.artist) {
            if self.config.adopt_title_fallback {
                (Resolution::WeakTitle, Some(c))
            } else {
                debug!(
                    title = %song.title,
                    candidate = %c.id,
                    "Discarding title-only weak match"
                );
                (Resolution::Discarded, None)
            }
        } else {
            (Resolution::Unresolved, None)
        };

        song.uri = match matched {
            Some(candidate) => UriState::Resolved(candidate.id.clone()),
            None => UriState::Unresolved,
        };

        debug!(
            title = %song.title,
            artist = %song.artist,
            resolution = ?resolution,
            "Resolved song"
        );

        resolution
    }
}
