//! Output formatting for classifications, matches and summaries.

pub mod json;
pub mod text;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::{CategoryScore, Classification};
use crate::cli::MatchMode;
use crate::keywords::MatchResult;
use crate::taxonomy::{self, TagGroup};

/// Outcome of `jobtag match`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub mode: MatchMode,
    /// Predicate result for `all`/`any`; always true otherwise.
    pub passed: bool,
    pub keywords: usize,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub score: f64,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub counts: BTreeMap<String, usize>,
}

impl MatchReport {
    pub fn new(mode: MatchMode, result: &MatchResult<'_>) -> Self {
        let passed = match mode {
            MatchMode::All => result.all_found(),
            MatchMode::Any => result.any_found(),
            MatchMode::Score | MatchMode::Counts => true,
        };
        Self {
            mode,
            passed,
            keywords: result.matched().len() + result.missing().len(),
            matched: result.matched().into_iter().map(String::from).collect(),
            missing: result.missing().into_iter().map(String::from).collect(),
            score: result.score(),
            counts: if mode == MatchMode::Counts {
                result.counts()
            } else {
                BTreeMap::new()
            },
        }
    }
}

/// Outcome of `jobtag classify`, optionally with per-category scores.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyReport {
    #[serde(flatten)]
    pub classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<CategoryScore>>,
}

/// One tag group of `jobtag tags`.
#[derive(Debug, Clone, Serialize)]
pub struct TagGroupListing {
    pub group: TagGroup,
    pub tags: Vec<&'static str>,
}

/// Dictionary listing of `jobtag tags`.
#[derive(Debug, Clone, Serialize)]
pub struct TagListing {
    pub categories: Vec<&'static str>,
    pub groups: Vec<TagGroupListing>,
}

impl TagListing {
    pub fn builtin() -> Self {
        Self {
            categories: taxonomy::all_categories(),
            groups: taxonomy::all_tags()
                .into_iter()
                .map(|(group, tags)| TagGroupListing { group, tags })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
