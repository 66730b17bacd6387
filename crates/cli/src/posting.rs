// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Posting records at the boundary with scrapers and tabular storage.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::classify::{Classification, Classifier};

/// Column order of tabular output.
pub const COLUMNS: [&str; 12] = [
    "title",
    "company",
    "location",
    "url",
    "description",
    "source",
    "posted_date",
    "posted_time",
    "scraped_at",
    "category",
    "tags",
    "classification_confidence",
];

/// Site a posting was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Linkedin,
    Startups,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Source {
    pub fn name(self) -> &'static str {
        match self {
            Source::Linkedin => "linkedin",
            Source::Startups => "startups",
            Source::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scraped job posting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Posting {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub posted_date: Option<String>,
    /// Hours since posting, when the site reports it.
    #[serde(default)]
    pub posted_time: Option<i64>,
    #[serde(default)]
    pub scraped_at: Option<String>,
}

impl Posting {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Classify with `classifier`, taking ownership of the posting.
    pub fn classify_with(self, classifier: &Classifier) -> ClassifiedPosting {
        let classification = classifier.classify(&self.title, &self.description);
        ClassifiedPosting {
            posting: self,
            classification,
        }
    }
}

impl fmt::Display for Posting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.company.is_empty() {
            write!(f, " at {}", self.company)?;
        }
        if !self.location.is_empty() {
            write!(f, " ({})", self.location)?;
        }
        Ok(())
    }
}

/// A posting together with its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedPosting {
    #[serde(flatten)]
    pub posting: Posting,
    #[serde(flatten)]
    pub classification: Classification,
}

impl ClassifiedPosting {
    /// Tabular shape with comma-joined tags.
    pub fn to_row(&self) -> PostingRow {
        let p = &self.posting;
        PostingRow {
            title: p.title.clone(),
            company: p.company.clone(),
            location: p.location.clone(),
            url: p.url.clone(),
            description: p.description.clone(),
            source: p.source,
            posted_date: p.posted_date.clone(),
            posted_time: p.posted_time,
            scraped_at: p.scraped_at.clone(),
            category: self.classification.category.to_string(),
            tags: self.classification.tags_joined(),
            classification_confidence: self.classification.confidence,
        }
    }
}

/// One row of tabular storage, fields in [`COLUMNS`] order.
///
/// `category` stays a string so rows written by other tools still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingRow {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub posted_date: Option<String>,
    #[serde(default)]
    pub posted_time: Option<i64>,
    #[serde(default)]
    pub scraped_at: Option<String>,
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: String,
    #[serde(default)]
    pub classification_confidence: f64,
}

impl PostingRow {
    /// Stored tags, split on commas with blanks dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "posting_tests.rs"]
mod tests;
