//! Behavioral specs for `jobtag summary`.
//!
//! Summary accepts raw postings (classified on the fly) or stored rows.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Categories sort by count, tags by count then first appearance
#[test]
fn summarizes_raw_postings() {
    summary().args(&[postings_fixture()]).passes().stdout_eq(concat!(
        "total jobs: 5\n",
        "\n",
        "categories:\n",
        "  Backend           2   40.00%\n",
        "  Frontend          1   20.00%\n",
        "  DevOps            1   20.00%\n",
        "  AI                1   20.00%\n",
        "  Fullstack         0    0.00%\n",
        "\n",
        "tags:\n",
        "  Python            4   80.00%\n",
        "  Kubernetes        3   60.00%\n",
        "  Docker            2   40.00%\n",
        "  React             1   20.00%\n",
        "  TypeScript        1   20.00%\n",
        "  AWS               1   20.00%\n",
        "  Terraform         1   20.00%\n",
        "  WebSocket         1   20.00%\n",
        "  PyTorch           1   20.00%\n",
    ));
}

/// > An empty batch reports zero jobs and nothing else
#[test]
fn empty_input() {
    summary().stdin("").passes().stdout_eq("total jobs: 0\n");
}

/// > Stored rows are counted as-is, without reclassifying
#[test]
fn stored_rows_keep_their_category() {
    let rows = concat!(
        r#"{"title": "Backend Engineer", "category": "AI", "tags": "Python, Docker"}"#,
        "\n",
        r#"{"title": "Analyst", "category": "Sales", "tags": ""}"#,
        "\n",
    );
    let json = summary().json().stdin(rows).passes();
    assert_eq!(json["total_jobs"], 2);
    assert_eq!(json["categories"][0]["name"], "AI");
    assert_eq!(json["categories"][0]["count"], 1);
    assert_eq!(json["categories"][0]["percentage"], 50.0);
    let tags: Vec<&str> = json["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(tags, ["Python", "Docker"]);
}

/// > Percentages round to two places
#[test]
fn percentages_round_to_two_places() {
    let rows = concat!(
        r#"{"title": "a", "category": "Backend"}"#,
        "\n",
        r#"{"title": "b", "category": "Frontend"}"#,
        "\n",
        r#"{"title": "c", "category": "Frontend"}"#,
        "\n",
    );
    let json = summary().json().stdin(rows).passes();
    assert_eq!(json["categories"][0]["percentage"], 66.67);
    assert_eq!(json["categories"][1]["percentage"], 33.33);
}

/// > JSON carries a generation timestamp
#[test]
fn json_has_timestamp() {
    let json = summary().json().stdin("").passes();
    assert_eq!(json["total_jobs"], 0);
    assert_eq!(json["categories"], serde_json::json!([]));
    assert!(json["generated_at"].as_str().unwrap().contains('T'));
}
