// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Batch processing: filter, de-duplicate, classify.
//!
//! Classification runs in parallel using rayon for large batches; output
//! order always matches input order.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::Serialize;

use crate::classify::Classifier;
use crate::config::Config;
use crate::dedup::{DedupKey, PostingCache, SeenPostings};
use crate::filter::{FilterDecision, SearchFilter};
use crate::posting::{ClassifiedPosting, Posting};

/// Threshold for switching to parallel classification.
/// Below this, sequential iteration is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 64;

/// Counters for one processed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub read: usize,
    pub rejected_by_filter: usize,
    pub duplicates: usize,
    pub classified: usize,
}

#[derive(Debug)]
pub struct PipelineOutput {
    pub postings: Vec<ClassifiedPosting>,
    pub stats: PipelineStats,
}

pub struct Pipeline {
    filter: SearchFilter,
    dedup: bool,
    classifier: &'static Classifier,
}

impl Pipeline {
    pub fn new(filter: SearchFilter, dedup: bool) -> Self {
        Self {
            filter,
            dedup,
            classifier: Classifier::builtin(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(SearchFilter::new(&config.filter), config.dedup.enabled)
    }

    /// Process a batch, de-duplicating within the batch only.
    pub fn process(&self, postings: Vec<Posting>) -> PipelineOutput {
        let mut seen = SeenPostings::new();
        self.process_with_cache(postings, &mut seen)
    }

    /// Process a batch against a caller-owned cache of seen postings.
    pub fn process_with_cache<C: PostingCache>(
        &self,
        postings: Vec<Posting>,
        cache: &mut C,
    ) -> PipelineOutput {
        let mut stats = PipelineStats {
            read: postings.len(),
            ..PipelineStats::default()
        };
        let mut seen_urls: HashSet<String> = HashSet::new();
        let mut kept = Vec::with_capacity(postings.len());

        for posting in postings {
            if let FilterDecision::Reject(reason) = self.filter.evaluate(&posting) {
                tracing::debug!("rejected '{}': {}", posting.title, reason);
                stats.rejected_by_filter += 1;
                continue;
            }

            if self.dedup && self.is_duplicate(&posting, cache, &mut seen_urls) {
                tracing::debug!("duplicate '{}' at {}", posting.title, posting.company);
                stats.duplicates += 1;
                continue;
            }

            kept.push(posting);
        }

        let postings = self.classify_all(kept);
        stats.classified = postings.len();

        tracing::info!(
            "processed {} postings: {} rejected, {} duplicates, {} classified",
            stats.read,
            stats.rejected_by_filter,
            stats.duplicates,
            stats.classified
        );

        PipelineOutput { postings, stats }
    }

    /// Content duplicates via the cache, then repeated URLs within the batch.
    fn is_duplicate<C: PostingCache>(
        &self,
        posting: &Posting,
        cache: &mut C,
        seen_urls: &mut HashSet<String>,
    ) -> bool {
        if cache.check_and_insert(DedupKey::for_posting(posting)) {
            return true;
        }
        let url = posting.url.trim();
        !url.is_empty() && !seen_urls.insert(url.to_string())
    }

    fn classify_all(&self, postings: Vec<Posting>) -> Vec<ClassifiedPosting> {
        let classifier = self.classifier;
        if postings.len() < PARALLEL_THRESHOLD {
            postings
                .into_iter()
                .map(|p| p.classify_with(classifier))
                .collect()
        } else {
            postings
                .into_par_iter()
                .map(|p| p.classify_with(classifier))
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
