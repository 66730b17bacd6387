// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Job market statistics over classified postings.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::posting::{ClassifiedPosting, PostingRow};
use crate::taxonomy::Category;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagSummary {
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketSummary {
    pub total_jobs: usize,
    /// Every category, most frequent first.
    pub categories: Vec<CategorySummary>,
    /// Tags seen at least once, most frequent first.
    pub tags: Vec<TagSummary>,
    pub generated_at: DateTime<Utc>,
}

/// `count / total` as a percentage rounded to two places; 0 when `total` is 0.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

pub fn generate_summary(postings: &[ClassifiedPosting]) -> MarketSummary {
    let mut tally = Tally::default();
    for p in postings {
        tally.add(
            p.classification.category.name(),
            p.classification.tags.iter().map(String::as_str),
        );
    }
    tally.finish(postings.len())
}

/// Summary over stored rows, using their recorded category and tags.
pub fn summarize_rows(rows: &[PostingRow]) -> MarketSummary {
    let mut tally = Tally::default();
    for row in rows {
        tally.add(&row.category, row.tag_list());
    }
    tally.finish(rows.len())
}

#[derive(Default)]
struct Tally {
    categories: HashMap<String, usize>,
    /// Insertion order is the tie-break for equal counts.
    tags: Vec<(String, usize)>,
    tag_index: HashMap<String, usize>,
}

impl Tally {
    fn add<'a>(&mut self, category: &str, tags: impl IntoIterator<Item = &'a str>) {
        *self.categories.entry(category.to_string()).or_default() += 1;
        for tag in tags {
            match self.tag_index.get(tag) {
                Some(&i) => self.tags[i].1 += 1,
                None => {
                    self.tag_index.insert(tag.to_string(), self.tags.len());
                    self.tags.push((tag.to_string(), 1));
                }
            }
        }
    }

    fn finish(self, total: usize) -> MarketSummary {
        let generated_at = Utc::now();
        if total == 0 {
            return MarketSummary {
                total_jobs: 0,
                categories: Vec::new(),
                tags: Vec::new(),
                generated_at,
            };
        }

        let mut categories: Vec<CategorySummary> = Category::ALL
            .iter()
            .map(|c| {
                let count = self.categories.get(c.name()).copied().unwrap_or(0);
                CategorySummary {
                    name: c.name().to_string(),
                    count,
                    percentage: percentage(count, total),
                }
            })
            .collect();
        // Stable: equal counts keep enumeration order
        categories.sort_by(|a, b| b.count.cmp(&a.count));

        let mut tags: Vec<TagSummary> = self
            .tags
            .into_iter()
            .map(|(name, count)| TagSummary {
                name,
                count,
                percentage: percentage(count, total),
            })
            .collect();
        tags.sort_by(|a, b| b.count.cmp(&a.count));

        tracing::debug!(
            "summary: {} jobs, {} categories, {} tags",
            total,
            categories.len(),
            tags.len()
        );

        MarketSummary {
            total_jobs: total,
            categories,
            tags,
            generated_at,
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
