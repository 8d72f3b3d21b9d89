//! Individual match rules, evaluated by [`super::resolve_by`] in priority order.

use regex::Regex;
use std::sync::LazyLock;

static WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-/,:]+").expect("valid word separator regex"));

/// Split a name into words on runs of whitespace, `-`, `/`, `,` and `:`
///
/// Leading and trailing separators yield empty words, so `"Foo-"` has two
/// words. This keeps word counts stable for the abbreviation rule.
pub fn split_words(text: &str) -> Vec<&str> {
    WORD_SEPARATOR.split(text).collect()
}

/// Case-insensitive equality of the whole name
pub fn is_exact(name: &str, search: &str) -> bool {
    name == search || name.to_lowercase() == search.to_lowercase()
}

/// One search character per word, each word starting with its character
pub fn is_abbreviation(name: &str, search: &str) -> bool {
    let words = split_words(name);
    words.len() == search.chars().count()
        && words
            .iter()
            .zip(search.chars())
            .all(|(word, initial)| starts_with_ignore_case(word, initial))
}

/// Every search part is contained in a later word than the previous part
///
/// Words are consumed monotonically: once a word satisfied a part, neither it
/// nor any word before it is looked at again.
pub fn contains_words(name: &str, parts: &[&str]) -> bool {
    let mut words = split_words(name).into_iter();
    parts.iter().all(|part| {
        let part = part.to_lowercase();
        words
            .by_ref()
            .any(|word| word.to_lowercase().contains(&part))
    })
}

fn starts_with_ignore_case(word: &str, initial: char) -> bool {
    word.chars().next().is_some_and(|first| {
        first == initial || first.to_lowercase().eq(initial.to_lowercase())
    })
}
