// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-keyword matching over free text.
//!
//! One linear scan of the text answers every query for a keyword set:
//! - No keywords: trivially satisfied
//! - Single keyword: memchr::memmem
//! - Multiple keywords: aho-corasick
//!
//! The free functions build a fresh index per call. Callers that query the
//! same keyword set repeatedly keep a [`KeywordAutomaton`] instead; both sides
//! implement [`KeywordIndex`] and give identical answers.

mod automaton;
mod set;

use std::collections::BTreeMap;

pub use automaton::{KeywordAutomaton, KeywordIndex, MatchResult};
pub use set::KeywordSet;

/// True iff every keyword occurs at least once in `text`.
///
/// An empty keyword set is vacuously satisfied, even by empty text.
pub fn match_all<S: AsRef<str>>(keywords: &[S], text: &str, case_sensitive: bool) -> bool {
    let set = KeywordSet::new(keywords, case_sensitive);
    let result = set.scan(text);
    let all_found = result.all_found();
    if all_found {
        tracing::debug!("all {} keywords found in text", set.len());
    } else {
        tracing::debug!(
            "missing keywords: {:?} (found {}/{})",
            result.missing(),
            result.found(),
            set.len()
        );
    }
    all_found
}

/// True iff at least one keyword occurs in `text`. Stops at the first hit.
pub fn match_any<S: AsRef<str>>(keywords: &[S], text: &str, case_sensitive: bool) -> bool {
    KeywordSet::new(keywords, case_sensitive).contains_any(text)
}

/// Fraction of distinct keywords found at least once, in `[0.0, 1.0]`.
pub fn match_score<S: AsRef<str>>(keywords: &[S], text: &str, case_sensitive: bool) -> f64 {
    let set = KeywordSet::new(keywords, case_sensitive);
    let result = set.scan(text);
    let score = result.score();
    tracing::debug!(
        "match score: {:.2} ({}/{} keywords)",
        score,
        result.found(),
        set.len()
    );
    score
}

/// Occurrence count for every keyword found in `text`.
///
/// Keywords that do not occur are absent from the map.
pub fn matched_counts<S: AsRef<str>>(
    keywords: &[S],
    text: &str,
    case_sensitive: bool,
) -> BTreeMap<String, usize> {
    KeywordSet::new(keywords, case_sensitive).scan(text).counts()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
