// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static category and technology-tag dictionaries.
//!
//! Dictionaries are compiled into the binary and never mutated. Enumeration
//! order matters: category order is the scoring tie-break and tag order is
//! the iteration order of the tagger.

mod categories;
mod tags;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use tags::TagDef;

/// Job-role category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Frontend,
    Backend,
    Fullstack,
    DevOps,
    AI,
}

impl Category {
    /// All categories in tie-break order.
    pub const ALL: [Category; 5] = [
        Category::Frontend,
        Category::Backend,
        Category::Fullstack,
        Category::DevOps,
        Category::AI,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Fullstack => "Fullstack",
            Category::DevOps => "DevOps",
            Category::AI => "AI",
        }
    }

    /// Keywords searched in the normalized title.
    pub fn title_keywords(self) -> &'static [&'static str] {
        categories::title_keywords(self)
    }

    /// Keywords searched in the normalized description.
    pub fn description_keywords(self) -> &'static [&'static str] {
        categories::description_keywords(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a category name outside the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Technology tag group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagGroup {
    Languages,
    Cloud,
    Frameworks,
    AiTools,
    Databases,
    DevopsTools,
    Other,
}

impl TagGroup {
    /// All groups in iteration order.
    pub const ALL: [TagGroup; 7] = [
        TagGroup::Languages,
        TagGroup::Cloud,
        TagGroup::Frameworks,
        TagGroup::AiTools,
        TagGroup::Databases,
        TagGroup::DevopsTools,
        TagGroup::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TagGroup::Languages => "languages",
            TagGroup::Cloud => "cloud",
            TagGroup::Frameworks => "frameworks",
            TagGroup::AiTools => "ai_tools",
            TagGroup::Databases => "databases",
            TagGroup::DevopsTools => "devops_tools",
            TagGroup::Other => "other",
        }
    }

    /// Canonical tags of this group with their synonyms.
    pub fn tags(self) -> &'static [TagDef] {
        tags::group_tags(self)
    }
}

impl fmt::Display for TagGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category names in enumeration order.
pub fn all_categories() -> Vec<&'static str> {
    Category::ALL.iter().map(|c| c.name()).collect()
}

/// Canonical tag names per group, in dictionary order.
pub fn all_tags() -> Vec<(TagGroup, Vec<&'static str>)> {
    TagGroup::ALL
        .iter()
        .map(|&group| (group, group.tags().iter().map(|t| t.name).collect()))
        .collect()
}

/// Every canonical tag name, sorted and de-duplicated.
pub fn flat_tags() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = TagGroup::ALL
        .iter()
        .flat_map(|group| group.tags().iter().map(|t| t.name))
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Look up a tag definition by canonical name (first group wins).
pub fn find_tag(name: &str) -> Option<(TagGroup, &'static TagDef)> {
    TagGroup::ALL.iter().find_map(|&group| {
        group
            .tags()
            .iter()
            .find(|t| t.name == name)
            .map(|t| (group, t))
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
