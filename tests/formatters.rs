use followgraph::core::{AnalysisReport, CorpusAnalyzer, FollowsGraph, InfluenceRanker, Post};
use followgraph::formatters::{DotFormatter, JsonCompactFormatter, ReportFormatter, TextFormatter};
use serde_json::{json, Value};

fn sample_report() -> AnalysisReport {
    let posts = vec![Post::new("A", "@b @C"), Post::new("b", "@c")];
    CorpusAnalyzer::new().analyze_posts(&posts)
}

#[test]
fn json_compact_snapshot_small_graph() {
    let s = JsonCompactFormatter::new().render(&sample_report()).unwrap();
    let v: Value = serde_json::from_str(&s).unwrap();

    // users are indexed in username order: a -> 0, b -> 1, c -> 2
    let expected = json!({
        "meta": {"posts": 2, "users": 3, "edges": 3, "format": "compact"},
        "users": ["a", "b", "c"],
        "edges": [[0, 1], [0, 2], [1, 2]],
        "influencers": [["c", 2], ["b", 1]]
    });
    assert_eq!(v, expected);
}

#[test]
fn json_full_mode_uses_objects() {
    let s = JsonCompactFormatter::new()
        .with_minimal(false)
        .render(&sample_report())
        .unwrap();
    let v: Value = serde_json::from_str(&s).unwrap();

    assert_eq!(v["meta"]["format"], "full");
    assert_eq!(v["influencers"][0], json!({"user": "c", "followers": 2}));
}

#[test]
fn json_formatter_writes_file() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    let path = tmp.path().with_extension("json");

    JsonCompactFormatter::new()
        .format_to_file(&sample_report(), &path)
        .unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let v: Value = serde_json::from_str(&data).unwrap();
    assert_eq!(v["meta"]["edges"].as_u64().unwrap(), 3);
    assert!(v["edges"].is_array());
}

#[test]
fn text_formatter_lists_ranking() {
    let s = TextFormatter::new().render(&sample_report()).unwrap();

    assert!(s.starts_with("POSTS:2 USERS:3 FOLLOWS:3\n"));
    assert!(s.contains("RANK  USER  FOLLOWERS"));
    let rows: Vec<&str> = s.lines().skip_while(|l| !l.starts_with("RANK")).skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].trim_start().starts_with("1  c"));
    assert!(rows[0].trim_end().ends_with('2'));
}

#[test]
fn text_formatter_handles_empty_ranking() {
    let report = CorpusAnalyzer::new().analyze_posts(&[Post::new("a", "quiet day")]);
    let s = TextFormatter::new().with_summary(false).render(&report).unwrap();
    assert_eq!(s, "No followed users found.\n");
}

#[test]
fn dot_formatter_emits_digraph() {
    let s = DotFormatter::new().render(&sample_report()).unwrap();

    assert!(s.starts_with("digraph"));
    assert_eq!(s.matches("->").count(), 3);
    for user in ["a", "b", "c"] {
        assert!(s.contains(&format!("\"{user}\"")));
    }
}

#[test]
fn text_columns_align_for_non_ascii_names() {
    let graph = FollowsGraph::from_adjacency([
        ("a", vec!["Ünïcödé_Ñame", "bob"]),
        ("b", vec!["ünïcödé_ñame"]),
    ]);
    let report = AnalysisReport {
        files_loaded: 0,
        files_skipped: 0,
        posts: 2,
        influencers: InfluenceRanker::rank_with_counts(&graph),
        graph,
    };
    let s = TextFormatter::new().with_summary(false).render(&report).unwrap();

    let widths: Vec<usize> = s.lines().map(|l| l.chars().count()).collect();
    assert_eq!(widths.len(), 3);
    assert!(widths.iter().all(|&w| w == widths[0]), "{s}");
}
