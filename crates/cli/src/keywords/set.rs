// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalized keyword sets.

use std::collections::HashSet;

use crate::normalize::fold_case;

/// Distinct, case-folded keywords in first-seen order.
///
/// A blank keyword is kept but never occurs, so `[""]` is a non-empty set
/// that no text satisfies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
    case_sensitive: bool,
}

impl KeywordSet {
    /// Build a set, folding case unless `case_sensitive`.
    pub fn new<I, S>(keywords: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut folded = Vec::new();
        for keyword in keywords {
            let keyword = fold_case(keyword.as_ref(), case_sensitive).into_owned();
            if seen.insert(keyword.clone()) {
                folded.push(keyword);
            }
        }
        Self {
            keywords: folded,
            case_sensitive,
        }
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Position of a keyword, after applying this set's case folding.
    pub fn position(&self, keyword: &str) -> Option<usize> {
        let keyword = fold_case(keyword, self.case_sensitive);
        self.keywords.iter().position(|k| *k == keyword)
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
