//! Progressively looser catalog queries
//!
//! `QueryPlan` yields at most three queries, each looser than the last:
//!
//! 1. `"{title} {artist}"`
//! 2. `"{title} {album}"`, unless the album is a local-only folder
//! 3. `"{title}"`
//!
//! The executor stops at the first query that returns candidates. The plan is
//! lazy, so nothing past that point is ever built.

use crate::normalize::ComparisonKey;
use syncify_core::MatchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    TitleArtist,
    TitleAlbum,
    Title,
    Done,
}

/// Lazy, finite, restartable sequence of catalog queries for one song
#[derive(Debug, Clone)]
pub struct QueryPlan<'a> {
    key: &'a ComparisonKey,
    local_album: bool,
    stage: Stage,
}

impl<'a> QueryPlan<'a> {
    /// Build the plan for a song's comparison key
    pub fn new(key: &'a ComparisonKey, config: &MatchConfig) -> Self {
        let prefix = config.local_album_prefix.as_str();
        Self {
            key,
            local_album: !prefix.is_empty() && key.album.starts_with(prefix),
            stage: Self::first_stage(key),
        }
    }

    fn first_stage(key: &ComparisonKey) -> Stage {
        if key.is_unknown() {
            Stage::Done
        } else {
            Stage::TitleArtist
        }
    }

    /// Rewind to the first query
    pub fn restart(&mut self) {
        self.stage = Self::first_stage(self.key);
    }

    /// The loosest query, searched separately as a second opinion
    pub fn title_only(&self) -> Option<String> {
        (!self.key.is_unknown()).then(|| self.key.title.clone())
    }
}

impl Iterator for QueryPlan<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let (query, next) = match self.stage {
                Stage::TitleArtist => (
                    (!self.key.artist.is_empty())
                        .then(|| format!("{} {}", self.key.title, self.key.artist)),
                    Stage::TitleAlbum,
                ),
                Stage::TitleAlbum => (
                    (!self.local_album && !self.key.album.is_empty())
                        .then(|| format!("{} {}", self.key.title, self.key.album)),
                    Stage::Title,
                ),
                Stage::Title => (Some(self.key.title.clone()), Stage::Done),
                Stage::Done => return None,
            };

            self.stage = next;
            if query.is_some() {
                return query;
            }
        }
    }
}
