// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading posting batches as JSON Lines or a JSON array.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::classify::Classifier;
use crate::error::{Error, Result};
use crate::posting::{Posting, PostingRow};

/// Where a batch is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` both mean stdin.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => InputSource::File(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    /// Name used in error messages.
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    pub fn read_to_string(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .map_err(|e| Error::Io {
                        path: PathBuf::from("-"),
                        source: e,
                    })?;
                Ok(content)
            }
            InputSource::File(path) => std::fs::read_to_string(path).map_err(|e| Error::Io {
                path: path.clone(),
                source: e,
            }),
        }
    }
}

/// A summary input record: a stored row or a raw posting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Record {
    /// Carries its own category and tags.
    Row(PostingRow),
    /// Needs classifying.
    Posting(Posting),
}

impl Record {
    /// Row form, classifying raw postings with `classifier`.
    pub fn into_row(self, classifier: &Classifier) -> PostingRow {
        match self {
            Record::Row(row) => row,
            Record::Posting(posting) => posting.classify_with(classifier).to_row(),
        }
    }
}

pub fn parse_postings(content: &str, source_name: &str) -> Result<Vec<Posting>> {
    parse_items(content, source_name)
}

pub fn parse_records(content: &str, source_name: &str) -> Result<Vec<Record>> {
    parse_items(content, source_name)
}

pub fn read_postings(source: &InputSource) -> Result<Vec<Posting>> {
    parse_postings(&source.read_to_string()?, &source.name())
}

pub fn read_records(source: &InputSource) -> Result<Vec<Record>> {
    parse_records(&source.read_to_string()?, &source.name())
}

/// A leading `[` selects JSON-array mode; otherwise one item per line.
fn parse_items<T: DeserializeOwned>(content: &str, source_name: &str) -> Result<Vec<T>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).map_err(|e| Error::Input {
            source_name: source_name.to_string(),
            line: e.line(),
            message: e.to_string(),
        });
    }

    let mut items = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let item = serde_json::from_str(line).map_err(|e| Error::Input {
            source_name: source_name.to_string(),
            line: index + 1,
            message: e.to_string(),
        })?;
        items.push(item);
    }
    tracing::debug!("read {} records from {}", items.len(), source_name);
    Ok(items)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
