//! Property-based tests for normalization and scoring
//!
//! Uses proptest to verify invariants across many random inputs.

use proptest::prelude::*;
use syncify_core::{Candidate, Song};
use syncify_matcher::{normalize, ComparisonKey, FieldKind, Matcher};

// ===== Helpers =====

fn field_kind() -> impl Strategy<Value = FieldKind> {
    prop_oneof![
        Just(FieldKind::Title),
        Just(FieldKind::Artist),
        Just(FieldKind::Album),
    ]
}

/// Tag-like text: words, brackets, separators and the occasional non-ASCII letter
fn tag_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ()\\[\\]&/.'\\-éü]{0,40}"
}

fn candidate_strategy() -> impl Strategy<Value = Candidate> {
    (
        "[a-z0-9]{1,8}",
        tag_text(),
        prop::collection::vec(tag_text(), 0..3),
        tag_text(),
        1990u32..2025,
        0.0f64..900.0,
    )
        .prop_map(|(id, title, artists, album, year, duration)| {
            let mut candidate = Candidate::new(id, title)
                .with_album(album)
                .with_year(year)
                .with_duration(duration);
            for artist in artists {
                candidate = candidate.with_artist(artist);
            }
            candidate
        })
}

// ===== Property Tests =====

proptest! {
    /// Property: normalizing a key again never changes it
    #[test]
    fn normalization_is_idempotent(text in tag_text(), kind in field_kind()) {
        let once = normalize(&text, kind);
        let twice = normalize(&once, kind);
        prop_assert_eq!(once, twice);
    }

    /// Property: any text, not just tag-like text, normalizes idempotently
    #[test]
    fn normalization_is_idempotent_for_any_text(text in any::<String>(), kind in field_kind()) {
        let once = normalize(&text, kind);
        prop_assert_eq!(normalize(&once, kind), once);
    }

    /// Property: keys are lower-case, trimmed and single-spaced
    #[test]
    fn keys_are_canonical(text in tag_text(), kind in field_kind()) {
        let key = normalize(&text, kind);
        prop_assert_eq!(key.to_lowercase(), key.clone());
        prop_assert_eq!(key.trim(), key.as_str());
        prop_assert!(!key.contains("  "));
    }

    /// Property: a candidate that trips the karaoke guard is never chosen
    #[test]
    fn karaoke_candidates_never_match(
        candidates in prop::collection::vec(candidate_strategy(), 0..8),
        flagged in prop::collection::vec(any::<bool>(), 8),
        length in 60.0f64..600.0,
    ) {
        let matcher = Matcher::default();
        let candidates: Vec<Candidate> = candidates
            .into_iter()
            .zip(flagged)
            .map(|(c, flag)| if flag { c.with_album("Karaoke Version") } else { c })
            .collect();

        let song = Song::new("Song", "Artist", "Album").with_length(length).with_year(2000);
        let key = ComparisonKey::of(&song);

        if let Some(c) = matcher.strong_match(&song, &candidates) {
            prop_assert!(matcher.passes_guard(c));
        }
        if let Some(c) = matcher.weak_match(&song, &candidates, &key.title, &key.artist) {
            prop_assert!(matcher.passes_guard(c));
        }
    }

    /// Property: the weak match has the smallest duration difference among
    /// eligible candidates
    #[test]
    fn weak_match_is_running_minimum(
        durations in prop::collection::vec(0.0f64..900.0, 1..10),
        length in 60.0f64..600.0,
    ) {
        let matcher = Matcher::default();
        let song = Song::new("Song", "Artist", "").with_length(length);
        let key = ComparisonKey::of(&song);
        let candidates: Vec<Candidate> = durations
            .iter()
            .enumerate()
            .map(|(i, d)| Candidate::new(i.to_string(), "Song").with_duration(*d))
            .collect();

        let best = durations
            .iter()
            .map(|d| (d - length).abs())
            .filter(|diff| *diff < 600.0)
            .fold(None, |acc: Option<f64>, diff| Some(acc.map_or(diff, |a| a.min(diff))));

        let matched = matcher.weak_match(&song, &candidates, &key.title, &key.artist);
        match best {
            Some(best) => {
                let c = matched.expect("an eligible candidate exists");
                prop_assert_eq!((c.duration - length).abs(), best);
            }
            None => prop_assert!(matched.is_none()),
        }
    }
}
