// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled keyword searchers and scan results.

use std::collections::BTreeMap;

use aho_corasick::{AhoCorasick, MatchKind};
use memchr::memmem::Finder;

use super::KeywordSet;
use crate::normalize::fold_case;

/// Search capability over a fixed keyword set.
///
/// [`KeywordSet`] rebuilds its searcher on every call; [`KeywordAutomaton`]
/// compiles once and is reused. Results are identical.
pub trait KeywordIndex {
    /// The keywords this index answers for.
    fn keywords(&self) -> &KeywordSet;

    /// Count occurrences of every keyword in one pass over `text`.
    fn scan(&self, text: &str) -> MatchResult<'_>;

    /// True if at least one keyword occurs (or the set is empty).
    fn contains_any(&self, text: &str) -> bool {
        self.scan(text).any_found()
    }

    /// True if every keyword occurs (or the set is empty).
    fn contains_all(&self, text: &str) -> bool {
        self.scan(text).all_found()
    }

    /// Fraction of distinct keywords found.
    fn score(&self, text: &str) -> f64 {
        self.scan(text).score()
    }

    /// Number of distinct keywords found.
    fn found_count(&self, text: &str) -> usize {
        self.scan(text).found()
    }
}

/// Keyword set compiled into a reusable searcher.
#[derive(Debug, Clone)]
pub struct KeywordAutomaton {
    keywords: KeywordSet,
    searcher: Searcher,
}

impl KeywordAutomaton {
    /// Compile keywords, folding case unless `case_sensitive`.
    pub fn new<I, S>(keywords: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_set(KeywordSet::new(keywords, case_sensitive))
    }

    pub fn from_set(keywords: KeywordSet) -> Self {
        let searcher = Searcher::build(&keywords);
        Self { keywords, searcher }
    }
}

impl KeywordIndex for KeywordAutomaton {
    fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    fn scan(&self, text: &str) -> MatchResult<'_> {
        let haystack = fold_case(text, self.keywords.case_sensitive());
        MatchResult {
            keywords: &self.keywords,
            counts: self.searcher.counts(&haystack, self.keywords.len()),
        }
    }

    fn contains_any(&self, text: &str) -> bool {
        if self.keywords.is_empty() {
            return true;
        }
        let haystack = fold_case(text, self.keywords.case_sensitive());
        self.searcher.is_match(&haystack)
    }
}

impl KeywordIndex for KeywordSet {
    fn keywords(&self) -> &KeywordSet {
        self
    }

    fn scan(&self, text: &str) -> MatchResult<'_> {
        let haystack = fold_case(text, self.case_sensitive());
        MatchResult {
            keywords: self,
            counts: Searcher::build(self).counts(&haystack, self.len()),
        }
    }

    fn contains_any(&self, text: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        let haystack = fold_case(text, self.case_sensitive());
        Searcher::build(self).is_match(&haystack)
    }
}

/// Per-keyword occurrence counts from one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    keywords: &'a KeywordSet,
    counts: Vec<usize>,
}

impl<'a> MatchResult<'a> {
    /// Number of distinct keywords found at least once.
    pub fn found(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Every keyword found. Vacuously true for an empty set.
    pub fn all_found(&self) -> bool {
        self.counts.iter().all(|&count| count > 0)
    }

    /// Some keyword found. Vacuously true for an empty set.
    pub fn any_found(&self) -> bool {
        self.keywords.is_empty() || self.counts.iter().any(|&count| count > 0)
    }

    /// `found / len`, or 1.0 for an empty set.
    pub fn score(&self) -> f64 {
        if self.keywords.is_empty() {
            return 1.0;
        }
        self.found() as f64 / self.keywords.len() as f64
    }

    /// Occurrences of one keyword (case-folded like the set).
    pub fn count(&self, keyword: &str) -> usize {
        self.keywords
            .position(keyword)
            .and_then(|idx| self.counts.get(idx).copied())
            .unwrap_or(0)
    }

    /// Keywords found, in set order.
    pub fn matched(&self) -> Vec<&'a str> {
        self.select(|count| count > 0)
    }

    /// Keywords not found, in set order.
    pub fn missing(&self) -> Vec<&'a str> {
        self.select(|count| count == 0)
    }

    /// Found keywords with their occurrence counts.
    pub fn counts(&self) -> BTreeMap<String, usize> {
        self.keywords
            .iter()
            .zip(&self.counts)
            .filter(|&(_, &count)| count > 0)
            .map(|(keyword, &count)| (keyword.to_string(), count))
            .collect()
    }

    fn select(&self, keep: impl Fn(usize) -> bool) -> Vec<&'a str> {
        self.keywords
            .iter()
            .zip(&self.counts)
            .filter(|&(_, &count)| keep(count))
            .map(|(keyword, _)| keyword)
            .collect()
    }
}

/// Searcher chosen by keyword count.
///
/// Blank keywords are left out of the searcher; each variant records the
/// set position (slot) of the keywords it does search for.
#[derive(Debug, Clone)]
enum Searcher {
    Empty,
    /// Single keyword (SIMD-optimized memchr).
    Literal { slot: usize, finder: Finder<'static> },
    /// Multiple keywords (Aho-Corasick automaton), pattern id to slot.
    Automaton { slots: Vec<usize>, automaton: AhoCorasick },
    /// One finder per keyword, used only when the automaton cannot be built.
    Finders(Vec<(usize, Finder<'static>)>),
}

impl Searcher {
    fn build(keywords: &KeywordSet) -> Self {
        let (slots, patterns): (Vec<usize>, Vec<&str>) = keywords
            .iter()
            .enumerate()
            .filter(|(_, keyword)| !keyword.is_empty())
            .unzip();
        match (slots.as_slice(), patterns.as_slice()) {
            (_, []) => Searcher::Empty,
            ([slot], [single]) => Searcher::Literal {
                slot: *slot,
                finder: Finder::new(single.as_bytes()).into_owned(),
            },
            (_, many) => {
                let built = AhoCorasick::builder()
                    .match_kind(MatchKind::Standard)
                    .build(many);
                match built {
                    Ok(automaton) => Searcher::Automaton { slots, automaton },
                    Err(e) => {
                        tracing::warn!("keyword automaton unavailable, scanning per keyword: {}", e);
                        Searcher::Finders(
                            slots
                                .into_iter()
                                .zip(many)
                                .map(|(slot, k)| (slot, Finder::new(k.as_bytes()).into_owned()))
                                .collect(),
                        )
                    }
                }
            }
        }
    }

    /// Occurrence counts aligned with keyword positions.
    ///
    /// Overlapping occurrences are all counted, so "react" and "reactjs" both
    /// count inside "reactjs".
    fn counts(&self, haystack: &str, len: usize) -> Vec<usize> {
        let mut counts = vec![0; len];
        match self {
            Searcher::Empty => {}
            Searcher::Literal { slot, finder } => {
                if let Some(count) = counts.get_mut(*slot) {
                    *count = count_overlapping(finder, haystack.as_bytes());
                }
            }
            Searcher::Automaton { slots, automaton } => {
                for m in automaton.find_overlapping_iter(haystack) {
                    let slot = slots.get(m.pattern().as_usize()).copied();
                    if let Some(count) = slot.and_then(|slot| counts.get_mut(slot)) {
                        *count += 1;
                    }
                }
            }
            Searcher::Finders(finders) => {
                for (slot, finder) in finders {
                    if let Some(count) = counts.get_mut(*slot) {
                        *count = count_overlapping(finder, haystack.as_bytes());
                    }
                }
            }
        }
        counts
    }

    fn is_match(&self, haystack: &str) -> bool {
        match self {
            Searcher::Empty => false,
            Searcher::Literal { finder, .. } => finder.find(haystack.as_bytes()).is_some(),
            Searcher::Automaton { automaton, .. } => automaton.is_match(haystack),
            Searcher::Finders(finders) => finders
                .iter()
                .any(|(_, finder)| finder.find(haystack.as_bytes()).is_some()),
        }
    }
}

/// Count every start position of the needle, overlapping ones included.
fn count_overlapping(finder: &Finder<'_>, haystack: &[u8]) -> usize {
    let mut count = 0;
    let mut pos = 0;
    while let Some(offset) = haystack.get(pos..).and_then(|rest| finder.find(rest)) {
        count += 1;
        pos += offset + 1;
    }
    count
}

#[cfg(test)]
#[path = "automaton_tests.rs"]
mod tests;
