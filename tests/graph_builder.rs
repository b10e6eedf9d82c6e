use followgraph::core::{build_follows_graph, FollowsGraph, GraphBuilder, Post};
use std::collections::{HashMap, HashSet};

fn post(author: &str, text: &str) -> Post {
    Post::new(author, text).with_timestamp("2016-02-17T10:00:00Z")
}

fn follows(graph: &FollowsGraph, user: &str) -> HashSet<String> {
    graph.follows(user).map(str::to_string).collect()
}

fn set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn empty_post_list_yields_empty_graph() {
    let graph = GraphBuilder::build(&[]);
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn posts_without_mentions_yield_empty_graph() {
    let posts = vec![
        post("user1", "Just a random tweet with no mentions."),
        post("user2", "email me at home @ 5, or @"),
        post("user3", "@!? @- @"),
    ];
    assert!(build_follows_graph(&posts).is_empty());
}

#[test]
fn single_mention_creates_edge() {
    let graph = GraphBuilder::build(&[post("user1", "Hello @user2")]);

    assert_eq!(follows(&graph, "user1"), set(&["user2"]));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn multiple_mentions_in_one_post() {
    let graph = GraphBuilder::build(&[post("user1", "Hello @user2 and @user3")]);
    assert_eq!(follows(&graph, "user1"), set(&["user2", "user3"]));
}

#[test]
fn mentions_accumulate_across_posts_from_one_author() {
    let graph = GraphBuilder::build(&[
        post("user1", "Hello @user2"),
        post("user1", "Hi again @user3"),
    ]);
    assert_eq!(follows(&graph, "user1"), set(&["user2", "user3"]));
}

#[test]
fn usernames_are_case_insensitive() {
    let mixed = GraphBuilder::build(&[post("UserA", "hi @UserB")]);
    let lower = GraphBuilder::build(&[post("usera", "hi @userb")]);

    assert_eq!(mixed, lower);

    let expected: HashMap<String, HashSet<String>> =
        HashMap::from([("usera".to_string(), set(&["userb"]))]);
    assert_eq!(mixed.as_map(), &expected);
    assert!(mixed.is_following("USERA", "UsErB"));
}

#[test]
fn authors_never_follow_themselves() {
    let posts = vec![
        post("Ernie", "talking to myself @ernie @ERNIE"),
        post("bert", "@Bert and @ernie"),
    ];
    let graph = GraphBuilder::build(&posts);

    for p in &posts {
        let author = p.author.to_lowercase();
        assert!(!follows(&graph, &author).contains(&author));
    }
    assert!(follows(&graph, "ernie").is_empty());
    assert_eq!(follows(&graph, "bert"), set(&["ernie"]));
}

#[test]
fn repeated_mentions_are_deduplicated() {
    let graph = GraphBuilder::build(&[
        post("user1", "@user2 @User2 @USER2"),
        post("user1", "still @user2"),
    ]);
    assert_eq!(follows(&graph, "user1").len(), 1);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn every_username_traces_back_to_the_posts() {
    let posts = vec![
        post("alyssa", "@Bitdiddle and @ben_b: lunch? cc hacker@MIT"),
        post("Ben_B", "ok @alyssa"),
        post("cy", "no mentions here"),
    ];
    let graph = GraphBuilder::build(&posts);

    let mut known: HashSet<String> = posts.iter().map(|p| p.author.to_lowercase()).collect();
    known.extend(set(&["bitdiddle", "ben_b", "mit", "alyssa"]));

    assert!(!graph.users().is_empty());
    for user in graph.users() {
        assert!(known.contains(user), "unexpected user {user}");
    }
    assert!(!graph.users().contains("cy"));
}

#[test]
fn incremental_builder_matches_batch_build() {
    let posts = vec![
        post("a", "@b @c"),
        post("b", "@c"),
        post("c", "@c @a"),
    ];

    let mut builder = GraphBuilder::new();
    assert_eq!(builder.add_post(&posts[0]), 2);
    assert_eq!(builder.add_post(&posts[1]), 1);
    assert_eq!(builder.add_post(&posts[2]), 1);
    assert_eq!(builder.add_post(&posts[0]), 0);

    assert_eq!(builder.finish(), GraphBuilder::build(&posts));
}

#[test]
fn input_posts_are_not_modified() {
    let posts = vec![post("UserA", "hi @UserB")];
    let before = posts.clone();
    let _ = GraphBuilder::build(&posts);
    assert_eq!(posts, before);
}
