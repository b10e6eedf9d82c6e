use anyhow::Result;
use std::fmt::Write;

use super::ReportFormatter;
use crate::core::AnalysisReport;

/// Plain-text ranking table for terminals.
pub struct TextFormatter {
    include_summary: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self {
            include_summary: true,
        }
    }

    pub fn with_summary(mut self, include: bool) -> Self {
        self.include_summary = include;
        self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn render(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        if self.include_summary {
            writeln!(
                out,
                "POSTS:{} USERS:{} FOLLOWS:{}",
                report.posts,
                report.graph.users().len(),
                report.graph.edge_count()
            )?;
            writeln!(out)?;
        }

        if report.influencers.is_empty() {
            writeln!(out, "No followed users found.")?;
            return Ok(out);
        }

        let width = report
            .influencers
            .iter()
            .map(|i| i.username.chars().count())
            .max()
            .unwrap_or(0)
            .max("USER".len());

        writeln!(out, "{:>4}  {:<width$}  {:>9}", "RANK", "USER", "FOLLOWERS")?;
        for (rank, influencer) in report.influencers.iter().enumerate() {
            writeln!(
                out,
                "{:>4}  {:<width$}  {:>9}",
                rank + 1,
                influencer.username,
                influencer.followers
            )?;
        }

        Ok(out)
    }
}
