use serde::Deserialize;
use std::path::Path;

use super::common::strip_bom;
use super::{LoadError, PostParser};
use crate::core::Post;

/// Accepted shapes of a `.json` corpus file.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCorpus {
    List(Vec<Post>),
    Wrapped { posts: Vec<Post> },
}

/// Parses a `.json` file holding either a bare array of posts or an object
/// with a `posts` array.
pub struct JsonPostParser;

impl JsonPostParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonPostParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PostParser for JsonPostParser {
    fn parse_source(&self, source: &str, path: &Path) -> Result<Vec<Post>, LoadError> {
        let corpus: JsonCorpus =
            serde_json::from_str(strip_bom(source)).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(match corpus {
            JsonCorpus::List(posts) | JsonCorpus::Wrapped { posts } => posts,
        })
    }

    fn format_name(&self) -> &str {
        "json"
    }
}
