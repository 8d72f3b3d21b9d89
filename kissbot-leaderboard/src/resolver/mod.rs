//! Cascading name resolution for user-typed option values.
//!
//! A search is tried against four rules in order and the first rule that
//! produces anything wins:
//!
//! 1. empty search: nothing matches
//! 2. exact, case-insensitive name
//! 3. abbreviation: one character per word (`TSS` → "Three Sided Symmetry")
//! 4. ordered word containment (`chlor tri` → "Chlorine Trifluoride")
//!
//! There is no edit-distance matching. Results always keep candidate order.

pub mod tiers;

use crate::core::{Category, Metric};
use crate::error::{LeaderboardError, Result};

/// Anything with a canonical display name that users can search for
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl Named for Category {
    fn name(&self) -> &str {
        self.label()
    }
}

impl Named for Metric {
    fn name(&self) -> &str {
        &self.label
    }
}

/// Resolve `search` against candidates by their [`Named::name`]
pub fn resolve<'a, T: Named>(search: &str, candidates: &'a [T]) -> Vec<&'a T> {
    resolve_by(search, candidates, |candidate| candidate.name())
}

/// Resolve `search` against candidates, reading names through `name`
pub fn resolve_by<'a, T, F>(search: &str, candidates: &'a [T], name: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    if search.is_empty() {
        return Vec::new();
    }

    if let Some(exact) = candidates
        .iter()
        .find(|candidate| tiers::is_exact(name(*candidate), search))
    {
        tracing::debug!("Resolved '{}' by exact match", search);
        return vec![exact];
    }

    let abbreviations: Vec<&T> = candidates
        .iter()
        .filter(|candidate| tiers::is_abbreviation(name(*candidate), search))
        .collect();
    if !abbreviations.is_empty() {
        tracing::debug!(
            "Resolved '{}' by abbreviation ({} matches)",
            search,
            abbreviations.len()
        );
        return abbreviations;
    }

    let parts = tiers::split_words(search);
    let contained: Vec<&T> = candidates
        .iter()
        .filter(|candidate| tiers::contains_words(name(*candidate), &parts))
        .collect();
    tracing::debug!(
        "Resolved '{}' by word containment ({} matches)",
        search,
        contained.len()
    );
    contained
}

/// Resolve `search` to exactly one candidate
///
/// This is the contract option parsing relies on: zero matches is
/// [`LeaderboardError::NotRecognized`], several is
/// [`LeaderboardError::Ambiguous`].
pub fn resolve_one<'a, T: Named>(search: &str, candidates: &'a [T]) -> Result<&'a T> {
    let matches = resolve(search, candidates);
    match matches.as_slice() {
        [single] => Ok(*single),
        [] => Err(LeaderboardError::NotRecognized(search.to_string())),
        _ => Err(LeaderboardError::Ambiguous {
            search: search.to_string(),
            matches: matches
                .iter()
                .map(|candidate| candidate.name())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLES: &[&str] = &[
        "Three Sided Symmetry",
        "Triplex",
        "Chlorine Trifluoride",
        "Of Pancakes and Spaceships",
        "Twin Sorters",
    ];

    fn names<'a>(matches: Vec<&&'a str>) -> Vec<&'a str> {
        matches.into_iter().copied().collect()
    }

    #[test]
    fn test_empty_search() {
        assert!(resolve("", PUZZLES).is_empty());
        assert!(resolve::<&str>("", &[""]).is_empty());
    }

    #[test]
    fn test_exact_match_wins() {
        assert_eq!(names(resolve("triplex", PUZZLES)), vec!["Triplex"]);
    }

    #[test]
    fn test_exact_match_beats_abbreviation() {
        let candidates = ["Ts", "Three Sided"];
        assert_eq!(names(resolve("TS", &candidates)), vec!["Ts"]);
    }

    #[test]
    fn test_abbreviation() {
        assert_eq!(names(resolve("TSS", PUZZLES)), vec!["Three Sided Symmetry"]);
        assert_eq!(names(resolve("opas", PUZZLES)), vec!["Of Pancakes and Spaceships"]);
    }

    #[test]
    fn test_abbreviation_returns_all_matches() {
        let candidates = ["Three Sided", "Twin Sorters", "Triplex"];
        assert_eq!(names(resolve("ts", &candidates)), vec!["Three Sided", "Twin Sorters"]);
    }

    #[test]
    fn test_word_containment() {
        assert_eq!(names(resolve("chlor tri", PUZZLES)), vec!["Chlorine Trifluoride"]);
        assert!(resolve("tri chlor", PUZZLES).is_empty());
    }

    #[test]
    fn test_containment_keeps_candidate_order() {
        assert_eq!(
            names(resolve("tri", PUZZLES)),
            vec!["Triplex", "Chlorine Trifluoride"]
        );
    }

    #[test]
    fn test_no_match() {
        assert!(resolve("zzz", PUZZLES).is_empty());
    }

    #[test]
    fn test_resolve_by_field() {
        struct Puzzle {
            display_name: &'static str,
        }
        let puzzles = [
            Puzzle { display_name: "Triplex" },
            Puzzle { display_name: "Twin Sorters" },
        ];
        let matches = resolve_by("twin", &puzzles, |p| p.display_name);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].display_name, "Twin Sorters");
    }

    #[test]
    fn test_resolve_one() {
        assert_eq!(*resolve_one("TSS", PUZZLES).unwrap(), "Three Sided Symmetry");
        assert!(matches!(
            resolve_one("zzz", PUZZLES),
            Err(LeaderboardError::NotRecognized(_))
        ));
        match resolve_one("tri", PUZZLES) {
            Err(LeaderboardError::Ambiguous { matches, .. }) => {
                assert_eq!(matches, "Triplex, Chlorine Trifluoride")
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }
}
