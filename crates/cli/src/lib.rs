pub mod classify;
pub mod cli;
pub mod color;
pub mod completions;
pub mod config;
pub mod dedup;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod input;
pub mod keywords;
pub mod normalize;
pub mod output;
pub mod pattern;
pub mod pipeline;
pub mod posting;
pub mod summary;
pub mod taxonomy;

pub use classify::{Classification, Classifier, classify, extract_tags};
pub use cli::{Cli, Command, MatchMode, OutputFormat};
pub use config::{Config, DedupConfig, FilterConfig};
pub use dedup::{DedupKey, PostingCache, SeenPostings};
pub use error::{Error, ExitCode, Result};
pub use filter::{FilterDecision, SearchFilter};
pub use keywords::{
    KeywordAutomaton, KeywordIndex, KeywordSet, MatchResult, match_all, match_any, match_score,
    matched_counts,
};
pub use pipeline::{Pipeline, PipelineOutput, PipelineStats};
pub use posting::{ClassifiedPosting, Posting, PostingRow, Source};
pub use summary::{MarketSummary, generate_summary, summarize_rows};
pub use taxonomy::{Category, TagGroup};

#[cfg(test)]
pub mod test_utils;
