pub mod dot;
pub mod json_compact;
pub mod text;

pub use dot::DotFormatter;
pub use json_compact::JsonCompactFormatter;
pub use text::TextFormatter;

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::AnalysisReport;

/// Renders an analysis report into one output format.
pub trait ReportFormatter {
    fn render(&self, report: &AnalysisReport) -> Result<String>;

    fn format_to_file(&self, report: &AnalysisReport, output_path: &Path) -> Result<()> {
        let content = self.render(report)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}
