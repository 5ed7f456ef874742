// Tests for the transition model

use linkrank_core::error::RankError;
use linkrank_core::graph::LinkGraph;
use linkrank_core::transition::transition_model;
use std::collections::{BTreeMap, BTreeSet};

fn graph(edges: &[(&str, &[&str])]) -> LinkGraph {
    let raw: BTreeMap<String, BTreeSet<String>> = edges
        .iter()
        .map(|(page, links)| {
            (
                page.to_string(),
                links.iter().map(|l| l.to_string()).collect(),
            )
        })
        .collect();
    LinkGraph::from_pages(raw).unwrap()
}

fn three_page_graph() -> LinkGraph {
    graph(&[
        ("1.html", &["2.html", "3.html"]),
        ("2.html", &["3.html"]),
        ("3.html", &[]),
    ])
}

// ============================================================================
// Distribution Shape Tests
// ============================================================================

#[test]
fn test_every_page_has_an_entry() {
    let g = three_page_graph();
    let dist = transition_model(&g, "2.html", 0.85).unwrap();
    assert_eq!(dist.len(), 3);
    for page in g.pages() {
        assert!(dist.contains_key(page), "missing entry for {}", page);
    }
}

#[test]
fn test_non_dangling_page_sums_to_one() {
    let g = three_page_graph();
    let dist = transition_model(&g, "1.html", 0.85).unwrap();
    let total: f64 = dist.values().sum();
    assert!((total - 1.0).abs() < 1e-9, "total was {}", total);
}

#[test]
fn test_baseline_and_link_bonus_split() {
    // N = 3, d = 0.85: baseline 0.05 each, 1.html's two targets split 0.85
    let g = three_page_graph();
    let dist = transition_model(&g, "1.html", 0.85).unwrap();

    assert!((dist["1.html"] - 0.05).abs() < 1e-9);
    assert!((dist["2.html"] - 0.475).abs() < 1e-9);
    assert!((dist["3.html"] - 0.475).abs() < 1e-9);
}

#[test]
fn test_single_link_receives_full_damping_mass() {
    let g = three_page_graph();
    let dist = transition_model(&g, "2.html", 0.85).unwrap();

    assert!((dist["3.html"] - (0.05 + 0.85)).abs() < 1e-9);
    assert!((dist["1.html"] - 0.05).abs() < 1e-9);
}

// ============================================================================
// Dangling Page Tests
// ============================================================================

#[test]
fn test_dangling_page_yields_bare_baseline() {
    // 3.html links nowhere: no link bonus, every entry is (1-d)/N
    let g = three_page_graph();
    let dist = transition_model(&g, "3.html", 0.85).unwrap();

    for (page, mass) in &dist {
        assert!((mass - 0.05).abs() < 1e-9, "{} had mass {}", page, mass);
    }

    let total: f64 = dist.values().sum();
    assert!((total - 0.15).abs() < 1e-9, "degenerate total was {}", total);
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_unknown_page_rejected() {
    let g = three_page_graph();
    let result = transition_model(&g, "missing.html", 0.85);
    assert!(matches!(result, Err(RankError::UnknownPage(_))));
}

#[test]
fn test_damping_out_of_range_rejected() {
    let g = three_page_graph();
    assert!(matches!(
        transition_model(&g, "1.html", 0.0),
        Err(RankError::InvalidParameter(_))
    ));
    assert!(matches!(
        transition_model(&g, "1.html", 1.0),
        Err(RankError::InvalidParameter(_))
    ));
    assert!(matches!(
        transition_model(&g, "1.html", -0.5),
        Err(RankError::InvalidParameter(_))
    ));
}
