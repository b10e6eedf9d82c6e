use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::graph::FollowsGraph;

/// A user together with their follower count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Influencer {
    pub username: String,
    pub followers: usize,
}

/// Orders users by how many people follow them.
pub struct InfluenceRanker;

impl InfluenceRanker {
    /// In-degree of every user followed by at least one other user.
    pub fn follower_counts(graph: &FollowsGraph) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for (_, followee) in graph.edges() {
            *counts.entry(followee.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Followed users with their counts, most followed first.
    ///
    /// Users nobody follows are left out. Equal counts are ordered by
    /// username; callers should not depend on that.
    pub fn rank_with_counts(graph: &FollowsGraph) -> Vec<Influencer> {
        let mut ranked: Vec<Influencer> = Self::follower_counts(graph)
            .into_iter()
            .map(|(username, followers)| Influencer { username, followers })
            .collect();

        ranked.sort_unstable_by(|a, b| {
            b.followers
                .cmp(&a.followers)
                .then_with(|| a.username.cmp(&b.username))
        });

        debug!(influencers = ranked.len(), "ranked users by follower count");
        ranked
    }

    /// Usernames in descending order of follower count.
    pub fn rank(graph: &FollowsGraph) -> Vec<String> {
        Self::rank_with_counts(graph)
            .into_iter()
            .map(|influencer| influencer.username)
            .collect()
    }
}

/// Free-function form of [`InfluenceRanker::rank`].
pub fn rank_influencers(graph: &FollowsGraph) -> Vec<String> {
    InfluenceRanker::rank(graph)
}
