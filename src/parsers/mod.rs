pub mod common;
pub mod json;
pub mod jsonl;

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::Post;

/// Failure to turn a corpus file into posts.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("malformed post at {}:{line}: {source}", .path.display())]
    JsonLine {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    #[error("unsupported corpus format: {0}")]
    UnsupportedFormat(String),
}

pub trait PostParser {
    /// Parses posts out of already-loaded file contents. `path` is only used
    /// for error reporting.
    fn parse_source(&self, source: &str, path: &Path) -> Result<Vec<Post>, LoadError>;

    fn parse_file(&self, path: &Path) -> Result<Vec<Post>, LoadError> {
        let source = common::read_source(path)?;
        self.parse_source(&source, path)
    }

    fn format_name(&self) -> &str;
}

pub struct ParserFactory;

impl ParserFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn get_parser(&self, format: &str) -> Result<Box<dyn PostParser + Send + Sync>, LoadError> {
        match format {
            "json" => Ok(Box::new(json::JsonPostParser::new())),
            "jsonl" | "ndjson" => Ok(Box::new(jsonl::JsonLinesPostParser::new())),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Canonical name for a corpus format; `ndjson` is an alias of `jsonl`.
    pub fn canonical_format(name: &str) -> Option<&'static str> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some("json"),
            "jsonl" | "ndjson" => Some("jsonl"),
            _ => None,
        }
    }

    /// Corpus format implied by a file extension, if any.
    pub fn format_for_extension(extension: &str) -> Option<&'static str> {
        Self::canonical_format(extension)
    }
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}
