use std::path::Path;

use super::common::strip_bom;
use super::{LoadError, PostParser};
use crate::core::Post;

/// Parses newline-delimited JSON: one post object per line. Blank lines are
/// skipped; line numbers in errors are 1-based.
pub struct JsonLinesPostParser;

impl JsonLinesPostParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonLinesPostParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PostParser for JsonLinesPostParser {
    fn parse_source(&self, source: &str, path: &Path) -> Result<Vec<Post>, LoadError> {
        let mut posts = Vec::new();

        for (index, line) in strip_bom(source).lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let post = serde_json::from_str(line).map_err(|source| LoadError::JsonLine {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            })?;
            posts.push(post);
        }

        Ok(posts)
    }

    fn format_name(&self) -> &str {
        "jsonl"
    }
}
