// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::pattern::{CompiledPattern, PatternError};
use crate::taxonomy::{TagDef, TagGroup};

/// Compiled tag dictionary.
#[derive(Debug, Clone, Default)]
pub struct Tagger {
    tags: Vec<(&'static str, CompiledPattern)>,
}

impl Tagger {
    /// Compile every tag of every group, in dictionary order.
    pub fn builtin() -> Result<Self, PatternError> {
        Self::from_defs(TagGroup::ALL.iter().flat_map(|group| group.tags()))
    }

    pub fn from_defs<'a, I>(defs: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = &'a TagDef>,
    {
        let tags = defs
            .into_iter()
            .map(|def| Ok((def.name, CompiledPattern::compile(def.synonyms)?)))
            .collect::<Result<Vec<_>, PatternError>>()?;
        Ok(Self { tags })
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags whose synonyms occur in `haystack`, sorted and de-duplicated.
    ///
    /// `haystack` must already be normalized.
    pub fn tags(&self, haystack: &str) -> Vec<String> {
        let mut found: Vec<String> = self
            .tags
            .iter()
            .filter(|(_, pattern)| pattern.is_match(haystack))
            .map(|(name, _)| (*name).to_string())
            .collect();
        found.sort();
        found.dedup();
        found
    }
}

#[cfg(test)]
#[path = "tagger_tests.rs"]
mod tests;
