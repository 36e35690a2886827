//! Syncify Matcher
//!
//! Decides which remote catalog entry, if any, is the same recording as a
//! locally tagged song.
//!
//! # Architecture
//!
//! - `normalize`: strips noise from titles, artists and albums to produce comparison keys
//! - `query`: progressively looser catalog queries built from the keys
//! - `scorer`: strong (disjunctive) and weak (running-minimum) match decisions
//! - `resolver`: drives the catalog collaborator through the query plan and scorer
//!
//! Everything except `resolver` is synchronous and pure.
//!
//! # Example
//!
//! ```rust
//! use syncify_core::{Candidate, MatchConfig, Song, UriState};
//! use syncify_matcher::{Matcher, Resolution};
//!
//! let matcher = Matcher::new(MatchConfig::default());
//! let mut song = Song::new("Song (Live)", "Artist A", "downloads")
//!     .with_length(200.0)
//!     .with_year(2020);
//! let results = vec![Candidate::new("track:1", "Song")
//!     .with_artist("Artist A")
//!     .with_album("Album X")
//!     .with_year(2020)
//!     .with_duration(205.0)];
//!
//! let resolution = matcher.resolve(&mut song, &results, &[]);
//! assert_eq!(resolution, Resolution::Strong);
//! assert_eq!(song.uri, UriState::Resolved("track:1".to_string()));
//! ```

pub mod normalize;
pub mod query;
pub mod resolver;
pub mod scorer;

mod types;

pub use normalize::{normalize, ComparisonKey, FieldKind};
pub use query::QueryPlan;
pub use resolver::SongResolver;
pub use scorer::Matcher;
pub use types::{PlaylistSearch, Resolution, SearchReport};
