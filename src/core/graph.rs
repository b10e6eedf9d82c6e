use petgraph::{graph::NodeIndex, Directed, Graph};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, trace};

use super::mentions::MentionExtractor;
use super::post::Post;
use super::username::normalize;

/// Directed petgraph view of a [`FollowsGraph`]: one node per username, one
/// edge per follow relationship pointing from follower to followee.
pub type UserGraph = Graph<String, (), Directed>;

/// Who follows whom, keyed by canonical username.
///
/// `graph[a]` is the set of users `a` follows. A user who follows nobody has
/// no entry at all; every accessor treats a missing entry as an empty set, so
/// two graphs with the same edges always compare equal. Nobody follows
/// themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowsGraph {
    follows: HashMap<String, HashSet<String>>,
}

impl FollowsGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a raw adjacency map.
    ///
    /// Names are normalized, so `"Bert"` and `"bert"` merge into one user.
    /// Self follows and empty follow sets are dropped.
    pub fn from_adjacency<I, K, S, T>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut graph = Self::new();
        for (follower, followees) in adjacency {
            for followee in followees {
                graph.add_follow(follower.as_ref(), followee.as_ref());
            }
        }
        graph
    }

    /// Records that `follower` follows `followee`.
    ///
    /// Returns `false` when the edge was already present or is a self follow.
    pub fn add_follow(&mut self, follower: &str, followee: &str) -> bool {
        self.insert_canonical(normalize(follower), normalize(followee))
    }

    fn insert_canonical(&mut self, follower: String, followee: String) -> bool {
        if follower == followee {
            return false;
        }
        self.follows.entry(follower).or_default().insert(followee)
    }

    /// Users that `user` follows. Empty for unknown users.
    pub fn follows(&self, user: &str) -> impl Iterator<Item = &str> {
        self.follows
            .get(&normalize(user))
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn is_following(&self, follower: &str, followee: &str) -> bool {
        self.follows
            .get(&normalize(follower))
            .map_or(false, |set| set.contains(&normalize(followee)))
    }

    /// Every (follower, followee) pair, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.follows.iter().flat_map(|(follower, followees)| {
            followees
                .iter()
                .map(move |followee| (follower.as_str(), followee.as_str()))
        })
    }

    /// Users that follow at least one other user.
    pub fn followers(&self) -> impl Iterator<Item = &str> {
        self.follows.keys().map(String::as_str)
    }

    /// Every username that appears in the graph, as follower or followee.
    pub fn users(&self) -> HashSet<&str> {
        self.edges()
            .flat_map(|(follower, followee)| [follower, followee])
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.follows.values().map(HashSet::len).sum()
    }

    /// True when there are no follow relationships at all.
    pub fn is_empty(&self) -> bool {
        self.follows.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<String, HashSet<String>> {
        &self.follows
    }

    /// Converts to a petgraph graph. Nodes are inserted in username order so
    /// node indices are stable for a given set of edges.
    pub fn to_petgraph(&self) -> UserGraph {
        let mut graph = UserGraph::new();
        let users: BTreeSet<&str> = self.users().into_iter().collect();
        let mut node_map: HashMap<&str, NodeIndex> = HashMap::with_capacity(users.len());

        for user in users {
            node_map.insert(user, graph.add_node(user.to_string()));
        }

        let mut edges: Vec<(&str, &str)> = self.edges().collect();
        edges.sort_unstable();
        for (follower, followee) in edges {
            graph.add_edge(node_map[follower], node_map[followee], ());
        }

        graph
    }
}

/// Accumulates follow evidence from posts.
///
/// An author is taken to follow every user they @-mention. Posts can be fed
/// one at a time with [`add_post`](Self::add_post) or all at once with
/// [`build`](Self::build).
pub struct GraphBuilder {
    extractor: MentionExtractor,
    graph: FollowsGraph,
    posts_seen: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            extractor: MentionExtractor::new(),
            graph: FollowsGraph::new(),
            posts_seen: 0,
        }
    }

    /// Guesses the follows graph from a list of posts.
    pub fn build(posts: &[Post]) -> FollowsGraph {
        let mut builder = Self::new();
        builder.add_posts(posts);
        builder.finish()
    }

    /// Scans one post and returns how many new edges it contributed.
    pub fn add_post(&mut self, post: &Post) -> usize {
        self.posts_seen += 1;
        let author = normalize(&post.author);
        let mut added = 0;

        for mentioned in self.extractor.extract(&post.text) {
            if mentioned == author {
                trace!(author = %author, "ignoring self mention");
                continue;
            }
            if self.graph.insert_canonical(author.clone(), mentioned) {
                added += 1;
            }
        }

        added
    }

    pub fn add_posts<'a>(&mut self, posts: impl IntoIterator<Item = &'a Post>) {
        for post in posts {
            self.add_post(post);
        }
    }

    pub fn finish(self) -> FollowsGraph {
        debug!(
            posts = self.posts_seen,
            users = self.graph.users().len(),
            edges = self.graph.edge_count(),
            "follows graph built"
        );
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Free-function form of [`GraphBuilder::build`].
pub fn build_follows_graph(posts: &[Post]) -> FollowsGraph {
    GraphBuilder::build(posts)
}
