use anyhow::Result;
use petgraph::dot::{Config, Dot};

use super::ReportFormatter;
use crate::core::AnalysisReport;

/// Graphviz rendering of the follows graph. Edges point from follower to
/// followee.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for DotFormatter {
    fn render(&self, report: &AnalysisReport) -> Result<String> {
        let graph = report.graph.to_petgraph().map(|_, name| name.clone(), |_, _| "");
        Ok(format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel])))
    }
}
