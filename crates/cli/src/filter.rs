// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ALL-match search filter gating which postings are kept.

use std::fmt;

use crate::config::FilterConfig;
use crate::keywords::{KeywordAutomaton, KeywordIndex, KeywordSet};
use crate::normalize::normalize;
use crate::posting::Posting;

/// Why a posting was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Company is on the exclusion list.
    ExcludedCompany(String),
    /// Required keywords absent from the description.
    MissingKeywords(Vec<String>),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::ExcludedCompany(company) => write!(f, "excluded company: {}", company),
            RejectReason::MissingKeywords(missing) => {
                write!(f, "missing keywords: {}", missing.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    Accept,
    Reject(RejectReason),
}

impl FilterDecision {
    pub fn is_accept(&self) -> bool {
        matches!(self, FilterDecision::Accept)
    }
}

/// Compiled search filter.
pub struct SearchFilter {
    keywords: KeywordAutomaton,
    excluded_companies: Vec<String>,
}

impl SearchFilter {
    pub fn new(config: &FilterConfig) -> Self {
        let excluded_companies = config
            .excluded_companies
            .iter()
            .map(|c| normalize(c))
            .filter(|c| !c.is_empty())
            .collect();
        Self {
            keywords: KeywordAutomaton::new(&config.keywords, config.case_sensitive),
            excluded_companies,
        }
    }

    /// Filter that accepts everything.
    pub fn accept_all() -> Self {
        Self::new(&FilterConfig::default())
    }

    pub fn keywords(&self) -> &KeywordSet {
        KeywordIndex::keywords(&self.keywords)
    }

    /// True when the filter has no keywords and no exclusions.
    pub fn is_empty(&self) -> bool {
        self.keywords().is_empty() && self.excluded_companies.is_empty()
    }

    /// Excluded company first, then ALL-match over the description.
    pub fn evaluate(&self, posting: &Posting) -> FilterDecision {
        let company = normalize(&posting.company);
        if !company.is_empty() && self.excluded_companies.contains(&company) {
            return FilterDecision::Reject(RejectReason::ExcludedCompany(posting.company.clone()));
        }

        let result = self.keywords.scan(&posting.description);
        if result.all_found() {
            FilterDecision::Accept
        } else {
            let missing = result.missing().into_iter().map(String::from).collect();
            FilterDecision::Reject(RejectReason::MissingKeywords(missing))
        }
    }

    pub fn accepts(&self, posting: &Posting) -> bool {
        self.evaluate(posting).is_accept()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
