//! Text output formatter.
//!
//! ```text
//! category:   Backend
//! confidence: 0.30
//! tags:       Docker, Kubernetes, Python
//! ```

use std::io::Write;
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::{MatchReport, TagListing};
use crate::classify::{CategoryScore, Classification};
use crate::cli::MatchMode;
use crate::color::scheme;
use crate::pipeline::PipelineStats;
use crate::posting::ClassifiedPosting;
use crate::summary::MarketSummary;

/// Width of the name column in tables.
const NAME_WIDTH: usize = 14;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn colored(&mut self, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn write_list(&mut self, spec: &ColorSpec, items: &[impl AsRef<str>]) -> std::io::Result<()> {
        if items.is_empty() {
            return writeln!(self.out, "(none)");
        }
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(self.out, ", ")?;
            }
            self.colored(spec, item.as_ref())?;
        }
        writeln!(self.out)
    }

    pub fn write_classification(
        &mut self,
        classification: &Classification,
        scores: Option<&[CategoryScore]>,
    ) -> std::io::Result<()> {
        write!(self.out, "category:   ")?;
        self.colored(&scheme::category(), classification.category.name())?;
        writeln!(self.out)?;

        write!(self.out, "confidence: ")?;
        self.colored(&scheme::number(), &format!("{:.2}", classification.confidence))?;
        writeln!(self.out)?;

        write!(self.out, "tags:       ")?;
        self.write_list(&scheme::tag(), &classification.tags)?;

        if let Some(scores) = scores {
            writeln!(self.out)?;
            self.colored(&scheme::heading(), "scores:")?;
            writeln!(self.out)?;
            for s in scores {
                write!(self.out, "  {:<width$}", s.category.name(), width = NAME_WIDTH)?;
                self.colored(&scheme::number(), &format!("{:>3}", s.score))?;
                writeln!(
                    self.out,
                    "  (title {}, description {})",
                    s.title_matches, s.description_matches
                )?;
            }
        }
        Ok(())
    }

    pub fn write_match(&mut self, report: &MatchReport) -> std::io::Result<()> {
        match report.mode {
            MatchMode::All | MatchMode::Any => {
                write!(self.out, "match: ")?;
                if report.passed {
                    self.colored(&scheme::matched(), "yes")?;
                } else {
                    self.colored(&scheme::unmatched(), "no")?;
                }
                writeln!(self.out)?;
            }
            MatchMode::Score => {
                write!(self.out, "score: ")?;
                self.colored(&scheme::number(), &format!("{:.2}", report.score))?;
                writeln!(self.out, " ({}/{})", report.matched.len(), report.keywords)?;
            }
            MatchMode::Counts => {
                if report.counts.is_empty() {
                    writeln!(self.out, "no keywords found")?;
                }
                for (keyword, count) in &report.counts {
                    write!(self.out, "{:<width$}", keyword, width = NAME_WIDTH)?;
                    self.colored(&scheme::number(), &count.to_string())?;
                    writeln!(self.out)?;
                }
                return Ok(());
            }
        }

        if !report.missing.is_empty() {
            write!(self.out, "missing: ")?;
            self.write_list(&scheme::missing(), &report.missing)?;
        }
        Ok(())
    }

    /// One line per processed posting.
    pub fn write_posting(&mut self, posting: &ClassifiedPosting) -> std::io::Result<()> {
        let c = &posting.classification;
        self.colored(
            &scheme::category(),
            &format!("{:<10}", c.category.name()),
        )?;
        self.colored(&scheme::number(), &format!("{:.2}", c.confidence))?;
        write!(self.out, "  {}", posting.posting)?;
        if !c.tags.is_empty() {
            write!(self.out, "  [")?;
            for (i, tag) in c.tags.iter().enumerate() {
                if i > 0 {
                    write!(self.out, ", ")?;
                }
                self.colored(&scheme::tag(), tag)?;
            }
            write!(self.out, "]")?;
        }
        writeln!(self.out)
    }

    pub fn write_stats(&mut self, stats: &PipelineStats) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{} read, {} rejected, {} duplicate{}, {} classified",
            stats.read,
            stats.rejected_by_filter,
            stats.duplicates,
            if stats.duplicates == 1 { "" } else { "s" },
            stats.classified
        )
    }

    pub fn write_summary(&mut self, summary: &MarketSummary) -> std::io::Result<()> {
        write!(self.out, "total jobs: ")?;
        self.colored(&scheme::number(), &summary.total_jobs.to_string())?;
        writeln!(self.out)?;

        if summary.total_jobs == 0 {
            return Ok(());
        }

        writeln!(self.out)?;
        self.colored(&scheme::heading(), "categories:")?;
        writeln!(self.out)?;
        for c in &summary.categories {
            self.write_row(&scheme::category(), &c.name, c.count, c.percentage)?;
        }

        writeln!(self.out)?;
        self.colored(&scheme::heading(), "tags:")?;
        writeln!(self.out)?;
        if summary.tags.is_empty() {
            writeln!(self.out, "  (none)")?;
        }
        for t in &summary.tags {
            self.write_row(&scheme::tag(), &t.name, t.count, t.percentage)?;
        }
        Ok(())
    }

    fn write_row(
        &mut self,
        spec: &ColorSpec,
        name: &str,
        count: usize,
        percentage: f64,
    ) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        self.colored(spec, &format!("{:<width$}", name, width = NAME_WIDTH))?;
        self.colored(&scheme::number(), &format!("{:>5}", count))?;
        writeln!(self.out, "  {:>6.2}%", percentage)
    }

    pub fn write_tags(&mut self, listing: &TagListing) -> std::io::Result<()> {
        self.colored(&scheme::heading(), "categories:")?;
        write!(self.out, " ")?;
        self.write_list(&scheme::category(), &listing.categories)?;

        for group in &listing.groups {
            self.colored(&scheme::heading(), &format!("{}:", group.group))?;
            write!(self.out, " ")?;
            self.write_list(&scheme::tag(), &group.tags)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
