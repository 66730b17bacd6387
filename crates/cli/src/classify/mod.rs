// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule-based job classification.
//!
//! A posting is scored against every category's title and description
//! keyword lists; title hits weigh [`TITLE_WEIGHT`] times a description hit.
//! Tags are extracted independently of the category.

mod tagger;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::keywords::{KeywordAutomaton, KeywordIndex};
use crate::normalize::{combined, normalize};
use crate::pattern::PatternError;
use crate::taxonomy::Category;

pub use tagger::Tagger;

/// Weight of a title keyword relative to a description keyword.
pub const TITLE_WEIGHT: usize = 3;

/// Combined score at which confidence saturates at 1.0.
pub const CONFIDENCE_DIVISOR: f64 = 10.0;

/// Category assigned when no keyword matched.
pub const FALLBACK_CATEGORY: Category = Category::Fullstack;

/// Confidence reported with [`FALLBACK_CATEGORY`].
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

/// Outcome of classifying one posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    /// Canonical tag names, sorted and de-duplicated.
    pub tags: Vec<String>,
    /// Heuristic strength in `[0.0, 1.0]`, not a probability.
    pub confidence: f64,
    /// Set when no category keyword matched.
    #[serde(skip)]
    fallback: bool,
}

impl Classification {
    /// Comma-joined tags, the form stored in tabular output.
    pub fn tags_joined(&self) -> String {
        self.tags.join(",")
    }

    /// True when no category keyword matched. A Fullstack title hit scores
    /// the same 0.3 confidence but is not a fallback.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// Per-category breakdown of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    /// Distinct title keywords found.
    pub title_matches: usize,
    /// Distinct description keywords found.
    pub description_matches: usize,
    /// `TITLE_WEIGHT * title_matches + description_matches`.
    pub score: usize,
}

struct CategoryIndex {
    category: Category,
    title: KeywordAutomaton,
    description: KeywordAutomaton,
}

impl CategoryIndex {
    fn new(category: Category) -> Self {
        Self {
            category,
            title: KeywordAutomaton::new(category.title_keywords(), false),
            description: KeywordAutomaton::new(category.description_keywords(), false),
        }
    }

    fn score(&self, title: &str, description: &str) -> CategoryScore {
        let title_matches = self.title.found_count(title);
        let description_matches = self.description.found_count(description);
        CategoryScore {
            category: self.category,
            title_matches,
            description_matches,
            score: TITLE_WEIGHT * title_matches + description_matches,
        }
    }
}

/// Classifier with every dictionary compiled once.
///
/// Immutable after construction and safe to share across threads.
pub struct Classifier {
    categories: Vec<CategoryIndex>,
    tagger: Tagger,
}

impl Classifier {
    /// Compile the built-in category and tag dictionaries.
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            categories: Self::category_indexes(),
            tagger: Tagger::builtin()?,
        })
    }

    /// Process-wide shared classifier.
    ///
    /// If the tag dictionary fails to compile, the shared instance still
    /// classifies categories but extracts no tags.
    pub fn builtin() -> &'static Classifier {
        static SHARED: OnceLock<Classifier> = OnceLock::new();
        SHARED.get_or_init(|| match Self::new() {
            Ok(classifier) => classifier,
            Err(e) => {
                tracing::error!("tag dictionary failed to compile, tagging disabled: {}", e);
                Self {
                    categories: Self::category_indexes(),
                    tagger: Tagger::default(),
                }
            }
        })
    }

    fn category_indexes() -> Vec<CategoryIndex> {
        Category::ALL.into_iter().map(CategoryIndex::new).collect()
    }

    /// Scores for every category, in enumeration order.
    pub fn scores(&self, title: &str, description: &str) -> Vec<CategoryScore> {
        let title = normalize(title);
        let description = normalize(description);
        self.categories
            .iter()
            .map(|index| index.score(&title, &description))
            .collect()
    }

    pub fn classify(&self, title: &str, description: &str) -> Classification {
        let scores = self.scores(title, description);
        let tags = self.extract_tags(title, description);

        let (category, confidence, fallback) = match best_score(&scores) {
            Some(best) if best.score >= 1 => (
                best.category,
                (best.score as f64 / CONFIDENCE_DIVISOR).min(1.0),
                false,
            ),
            _ => (FALLBACK_CATEGORY, FALLBACK_CONFIDENCE, true),
        };

        tracing::debug!(
            "classified as {} (confidence {:.2}, {} tags)",
            category,
            confidence,
            tags.len()
        );

        Classification {
            category,
            tags,
            confidence,
            fallback,
        }
    }

    /// Canonical tags found in the combined title and description.
    pub fn extract_tags(&self, title: &str, description: &str) -> Vec<String> {
        self.tagger.tags(&combined(title, description))
    }

    pub fn tagger(&self) -> &Tagger {
        &self.tagger
    }
}

/// First score holding the maximum. `Iterator::max_by_key` keeps the last.
fn best_score(scores: &[CategoryScore]) -> Option<&CategoryScore> {
    let mut best: Option<&CategoryScore> = None;
    for score in scores {
        if best.is_none_or(|b| score.score > b.score) {
            best = Some(score);
        }
    }
    best
}

/// Classify with the shared [`Classifier`].
pub fn classify(title: &str, description: &str) -> Classification {
    Classifier::builtin().classify(title, description)
}

/// Extract tags with the shared [`Classifier`].
pub fn extract_tags(title: &str, description: &str) -> Vec<String> {
    Classifier::builtin().extract_tags(title, description)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
