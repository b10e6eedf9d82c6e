use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

use super::{
    CorpusFile, CorpusScanner, FollowsGraph, GraphBuilder, InfluenceRanker, Influencer, Post,
};
use crate::parsers::{LoadError, ParserFactory};

/// Options for a corpus analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Corpus formats to pick up while scanning (`json`, `jsonl`).
    pub formats: Vec<String>,
    /// Keep only the `top` most followed users in the ranking.
    pub top: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            formats: vec!["json".to_string(), "jsonl".to_string()],
            top: None,
        }
    }
}

/// Result of running the whole pipeline over a corpus.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub posts: usize,
    pub graph: FollowsGraph,
    pub influencers: Vec<Influencer>,
}

/// Loads posts, guesses the follows graph and ranks influencers.
pub struct CorpusAnalyzer {
    config: AnalyzerConfig,
    corpus_scanner: CorpusScanner,
    parser_factory: ParserFactory,
}

impl CorpusAnalyzer {
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            corpus_scanner: CorpusScanner::new(),
            parser_factory: ParserFactory::new(),
        }
    }

    /// Runs the pipeline over a corpus file or directory.
    ///
    /// When `root` is a single file, failing to load it is an error. Inside a
    /// directory, unreadable or malformed files are logged and skipped.
    pub fn analyze(&self, root: &Path) -> Result<AnalysisReport> {
        let formats: Vec<&str> = self.config.formats.iter().map(String::as_str).collect();
        let files = self.corpus_scanner.scan(root, &formats)?;

        if root.is_file() && files.is_empty() {
            bail!(
                "{} is not a recognised corpus file (expected one of: {})",
                root.display(),
                formats.join(", ")
            );
        }
        info!(files = files.len(), "scanning corpus at {}", root.display());

        let loaded: Vec<(&CorpusFile, Result<Vec<Post>, LoadError>)> = files
            .par_iter()
            .map(|file| (file, self.load_file(file)))
            .collect();

        let mut posts = Vec::new();
        let mut files_loaded = 0;
        let mut files_skipped = 0;

        for (file, result) in loaded {
            match result {
                Ok(file_posts) => {
                    files_loaded += 1;
                    posts.extend(file_posts);
                }
                Err(err) if root.is_file() => {
                    return Err(err)
                        .with_context(|| format!("failed to load {}", file.path.display()));
                }
                Err(err) => {
                    files_skipped += 1;
                    warn!("skipping {}: {}", file.path.display(), err);
                }
            }
        }

        let mut report = self.analyze_posts(&posts);
        report.files_loaded = files_loaded;
        report.files_skipped = files_skipped;
        Ok(report)
    }

    /// Runs the graph and ranking stages over posts already in memory.
    pub fn analyze_posts(&self, posts: &[Post]) -> AnalysisReport {
        let graph = GraphBuilder::build(posts);
        let mut influencers = InfluenceRanker::rank_with_counts(&graph);
        if let Some(top) = self.config.top {
            influencers.truncate(top);
        }

        info!(
            posts = posts.len(),
            edges = graph.edge_count(),
            influencers = influencers.len(),
            "analysis complete"
        );

        AnalysisReport {
            files_loaded: 0,
            files_skipped: 0,
            posts: posts.len(),
            graph,
            influencers,
        }
    }

    fn load_file(&self, file: &CorpusFile) -> Result<Vec<Post>, LoadError> {
        let parser = self.parser_factory.get_parser(&file.format)?;
        let posts = parser.parse_file(&file.path)?;
        debug!(
            path = %file.path.display(),
            format = parser.format_name(),
            posts = posts.len(),
            "loaded corpus file"
        );
        Ok(posts)
    }
}

impl Default for CorpusAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
