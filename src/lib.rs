//! # followgraph
//!
//! Guess who follows whom from the @-mentions in a corpus of short posts, and
//! rank users by how many followers that guess gives them.
//!
//! ## Pipeline
//!
//! - [`core::GraphBuilder`]: posts -> [`core::FollowsGraph`]. An author follows
//!   everyone they @-mention (case-insensitive, never themselves).
//! - [`core::InfluenceRanker`]: graph -> usernames by descending follower count.
//!
//! Corpus loading ([`parsers`]), report rendering ([`formatters`]) and the
//! [`core::CorpusAnalyzer`] driver wrap those two steps for the CLI.
//!
//! ```
//! use followgraph::core::{GraphBuilder, InfluenceRanker, Post};
//!
//! let posts = vec![
//!     Post::new("alyssa", "lunch with @Bitdiddle?"),
//!     Post::new("ben", "@bitdiddle agreed"),
//! ];
//! let graph = GraphBuilder::build(&posts);
//! assert_eq!(InfluenceRanker::rank(&graph), vec!["bitdiddle"]);
//! ```

pub mod core;
pub mod formatters;
pub mod observability;
pub mod parsers;
