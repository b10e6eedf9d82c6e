use anyhow::Result;
use petgraph::visit::EdgeRef;
use serde_json::json;

use super::ReportFormatter;
use crate::core::AnalysisReport;

/// JSON output with users referenced by index to keep edge lists small.
pub struct JsonCompactFormatter {
    /// Emit `[user, followers]` pairs instead of objects in the ranking
    minimal: bool,
}

impl JsonCompactFormatter {
    pub fn new() -> Self {
        Self { minimal: true }
    }

    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }
}

impl Default for JsonCompactFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonCompactFormatter {
    fn render(&self, report: &AnalysisReport) -> Result<String> {
        let graph = report.graph.to_petgraph();

        // Node indices follow username order, so positions here match the
        // indices used in `edges`.
        let users: Vec<&str> = graph.node_weights().map(String::as_str).collect();

        let edges: Vec<[usize; 2]> = graph
            .edge_references()
            .map(|edge| [edge.source().index(), edge.target().index()])
            .collect();

        let influencers: Vec<serde_json::Value> = report
            .influencers
            .iter()
            .map(|influencer| {
                if self.minimal {
                    json!([influencer.username, influencer.followers])
                } else {
                    json!({
                        "user": influencer.username,
                        "followers": influencer.followers
                    })
                }
            })
            .collect();

        let output = json!({
            "meta": {
                "posts": report.posts,
                "users": graph.node_count(),
                "edges": graph.edge_count(),
                "format": if self.minimal { "compact" } else { "full" }
            },
            "users": users,
            "edges": edges,
            "influencers": influencers
        });

        Ok(serde_json::to_string(&output)?)
    }
}
