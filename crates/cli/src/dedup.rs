// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duplicate detection keyed by company and description content.
//!
//! A posting is a duplicate when the same company has already published a
//! description with identical normalized text, whatever its URL.

use std::collections::{HashMap, HashSet};

use sha2::{Digest, Sha256};

use crate::normalize::normalize;
use crate::posting::Posting;

/// Prefix of every company key.
pub const COMPANY_KEY_PREFIX: &str = "job:company:";

/// Identity of a posting for de-duplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    /// `job:company:<lowercased company, spaces as underscores>`
    pub company_key: String,
    /// Hex SHA-256 of the normalized description.
    pub description_hash: String,
}

impl DedupKey {
    pub fn new(company: &str, description: &str) -> Self {
        Self {
            company_key: company_key(company),
            description_hash: description_hash(description),
        }
    }

    pub fn for_posting(posting: &Posting) -> Self {
        Self::new(&posting.company, &posting.description)
    }
}

pub fn company_key(company: &str) -> String {
    format!("{}{}", COMPANY_KEY_PREFIX, normalize(company).replace(' ', "_"))
}

pub fn description_hash(description: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize(description).as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Store of already-seen postings.
///
/// Implementations decide retention; the pipeline only asks and records.
pub trait PostingCache {
    fn contains(&self, key: &DedupKey) -> bool;

    fn insert(&mut self, key: DedupKey);

    /// Record `key`, returning true if it was already present.
    fn check_and_insert(&mut self, key: DedupKey) -> bool {
        if self.contains(&key) {
            return true;
        }
        self.insert(key);
        false
    }
}

/// In-memory cache grouped by company, for one process run.
#[derive(Debug, Default)]
pub struct SeenPostings {
    by_company: HashMap<String, HashSet<String>>,
}

impl SeenPostings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct descriptions recorded.
    pub fn len(&self) -> usize {
        self.by_company.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_company.is_empty()
    }

    /// Descriptions recorded for one company.
    pub fn company_len(&self, company: &str) -> usize {
        self.by_company
            .get(&company_key(company))
            .map_or(0, HashSet::len)
    }
}

impl PostingCache for SeenPostings {
    fn contains(&self, key: &DedupKey) -> bool {
        self.by_company
            .get(&key.company_key)
            .is_some_and(|hashes| hashes.contains(&key.description_hash))
    }

    fn insert(&mut self, key: DedupKey) {
        self.by_company
            .entry(key.company_key)
            .or_default()
            .insert(key.description_hash);
    }
}

#[cfg(test)]
#[path = "dedup_tests.rs"]
mod tests;
