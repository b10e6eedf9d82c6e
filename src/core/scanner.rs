use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::parsers::ParserFactory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFile {
    pub path: PathBuf,
    pub format: String,
    pub extension: String,
}

/// Finds post corpus files under a path.
pub struct CorpusScanner;

impl CorpusScanner {
    pub fn new() -> Self {
        Self
    }

    /// Lists corpus files for the requested formats, sorted by path.
    ///
    /// A file `root` is returned as-is when its extension maps to a requested
    /// format. A directory is walked recursively; entries below the root that
    /// cannot be read are logged and skipped. Unknown format names are an error.
    pub fn scan(&self, root: &Path, formats: &[&str]) -> Result<Vec<CorpusFile>> {
        let supported_extensions = self.get_extensions_for_formats(formats)?;

        if root.is_file() {
            return Ok(self
                .classify(root, &supported_extensions)
                .into_iter()
                .collect());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(err)
                        .with_context(|| format!("failed to walk corpus at {}", root.display()));
                }
                Err(err) => {
                    warn!("skipping unreadable corpus entry: {}", err);
                    continue;
                }
            };
            // `Path::is_file` follows symlinks, so linked corpus files count.
            if !entry.path().is_file() {
                continue;
            }
            if let Some(file) = self.classify(entry.path(), &supported_extensions) {
                files.push(file);
            }
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(root = %root.display(), files = files.len(), "corpus scan finished");
        Ok(files)
    }

    fn classify(&self, path: &Path, supported: &HashMap<String, String>) -> Option<CorpusFile> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        let format = supported.get(&extension)?;
        Some(CorpusFile {
            path: path.to_path_buf(),
            format: format.clone(),
            extension,
        })
    }

    fn get_extensions_for_formats(&self, formats: &[&str]) -> Result<HashMap<String, String>> {
        let mut requested = Vec::with_capacity(formats.len());
        for &name in formats {
            match ParserFactory::canonical_format(name) {
                Some(format) => requested.push(format),
                None => bail!(
                    "unsupported corpus format '{}' (expected json, jsonl or ndjson)",
                    name
                ),
            }
        }

        let mut extensions = HashMap::with_capacity(formats.len() * 2);
        for extension in ["json", "jsonl", "ndjson"] {
            if let Some(format) = ParserFactory::format_for_extension(extension) {
                if requested.contains(&format) {
                    extensions.insert(extension.to_string(), format.to_string());
                }
            }
        }

        Ok(extensions)
    }
}

impl Default for CorpusScanner {
    fn default() -> Self {
        Self::new()
    }
}
