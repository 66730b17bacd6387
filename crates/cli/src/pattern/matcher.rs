// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled synonym matchers with automatic optimization.

use aho_corasick::AhoCorasick;
use memchr::memmem::Finder;
use regex::Regex;

use crate::normalize::is_boundary_pattern;

/// A compiled synonym list optimized for its structure.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    /// Single literal string (fastest).
    Literal(LiteralMatcher),
    /// Multiple literal strings (Aho-Corasick).
    MultiLiteral(MultiLiteralMatcher),
    /// Case-insensitive regex alternation (word boundaries).
    Regex(RegexMatcher),
}

/// Matcher for single literal strings using SIMD-optimized memchr.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    finder: Finder<'static>,
}

/// Matcher for multiple literal strings using Aho-Corasick automaton.
#[derive(Debug, Clone)]
pub struct MultiLiteralMatcher {
    automaton: AhoCorasick,
}

/// Matcher for synonym lists containing boundary patterns.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

impl CompiledPattern {
    /// Compile a synonym list into an optimized matcher.
    ///
    /// Plain synonyms are matched as lowercase substrings, so the haystack
    /// must already be normalized. Boundary synonyms (`\b...`) switch the
    /// whole list to one case-insensitive regex; plain synonyms in that list
    /// are escaped and keep substring semantics.
    pub fn compile<S: AsRef<str>>(synonyms: &[S]) -> Result<Self, PatternError> {
        let synonyms: Vec<&str> = synonyms
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| !s.is_empty())
            .collect();

        if synonyms.iter().any(|s| is_boundary_pattern(s)) {
            return Ok(CompiledPattern::Regex(RegexMatcher::alternation(&synonyms)?));
        }

        let literals: Vec<String> = synonyms.iter().map(|s| s.to_lowercase()).collect();
        match literals.as_slice() {
            [] => Err(PatternError::InvalidPattern(
                "synonym list is empty".to_string(),
            )),
            [single] => Ok(CompiledPattern::Literal(LiteralMatcher::new(single))),
            many => Ok(CompiledPattern::MultiLiteral(MultiLiteralMatcher::new(
                many,
            )?)),
        }
    }

    /// Whether any synonym occurs in the (normalized) content.
    pub fn is_match(&self, content: &str) -> bool {
        match self {
            CompiledPattern::Literal(m) => m.is_match(content),
            CompiledPattern::MultiLiteral(m) => m.is_match(content),
            CompiledPattern::Regex(m) => m.is_match(content),
        }
    }
}

impl LiteralMatcher {
    /// Create a new literal matcher.
    pub fn new(pattern: &str) -> Self {
        Self {
            finder: Finder::new(pattern.as_bytes()).into_owned(),
        }
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.finder.find(content.as_bytes()).is_some()
    }
}

impl MultiLiteralMatcher {
    /// Create a new multi-literal matcher using Aho-Corasick.
    pub fn new(patterns: &[String]) -> Result<Self, PatternError> {
        let automaton = AhoCorasick::new(patterns)
            .map_err(|e| PatternError::InvalidPattern(format!("aho-corasick error: {}", e)))?;
        Ok(Self { automaton })
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.automaton.is_match(content)
    }
}

impl RegexMatcher {
    /// Create a new regex matcher.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern)?;
        Ok(Self { regex })
    }

    /// Build `(?i)(?:a|b|...)` from boundary patterns and escaped literals.
    pub fn alternation(synonyms: &[&str]) -> Result<Self, PatternError> {
        let branches: Vec<String> = synonyms
            .iter()
            .map(|s| {
                if is_boundary_pattern(s) {
                    s.to_string()
                } else {
                    regex::escape(s)
                }
            })
            .collect();
        Self::new(&format!("(?i)(?:{})", branches.join("|")))
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
