pub mod analyzer;
pub mod graph;
pub mod mentions;
pub mod post;
pub mod ranker;
pub mod scanner;
pub mod username;

pub use analyzer::{AnalysisReport, AnalyzerConfig, CorpusAnalyzer};
pub use graph::{build_follows_graph, FollowsGraph, GraphBuilder, UserGraph};
pub use mentions::MentionExtractor;
pub use post::Post;
pub use ranker::{rank_influencers, InfluenceRanker, Influencer};
pub use scanner::{CorpusFile, CorpusScanner};
pub use username::normalize;
