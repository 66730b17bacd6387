// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text normalization shared by the matcher and the classifier.
//!
//! Normalization only folds case and trims. Punctuation is kept because the
//! dictionaries carry punctuation-bearing forms such as `c#`, `c++` and `.net`.

use std::borrow::Cow;

/// Word-boundary marker that turns a keyword into a regex pattern.
pub const BOUNDARY_MARKER: &str = r"\b";

/// Lowercase and trim a piece of free text.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Fold case unless matching is case-sensitive.
pub fn fold_case(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

/// Normalized `title + " " + description`, the haystack for tag extraction.
pub fn combined(title: &str, description: &str) -> String {
    normalize(&format!("{} {}", title, description))
}

/// Whether a keyword is a `\b`-prefixed regex rather than a plain substring.
pub fn is_boundary_pattern(keyword: &str) -> bool {
    keyword.starts_with(BOUNDARY_MARKER)
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
