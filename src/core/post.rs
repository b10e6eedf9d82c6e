use serde::{Deserialize, Serialize};

/// A single short post, as read from a corpus file.
///
/// Only `author` and `text` feed the follows graph. `timestamp` is carried
/// through untouched and `id` is whatever the source file supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub author: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Post {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: None,
            author: author.into(),
            text: text.into(),
            timestamp: None,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}
