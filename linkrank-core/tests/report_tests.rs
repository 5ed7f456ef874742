// Tests for report generation functionality

use linkrank_core::report::{
    DISPLAY_PRECISION, RankMethod, RankReport, ReportFormat, ranked_entries, render_report,
};
use linkrank_core::transition::Distribution;

fn sample_distribution() -> Distribution {
    let mut dist = Distribution::new();
    dist.insert("b.html".to_string(), 0.350877192982456);
    dist.insert("a.html".to_string(), 0.649122807017544);
    dist
}

// ============================================================================
// Report Format Tests
// ============================================================================

#[test]
fn test_report_format_from_str_text() {
    let format = ReportFormat::from_str("text");
    assert!(matches!(format, Some(ReportFormat::Text)));
}

#[test]
fn test_report_format_from_str_json() {
    let format = ReportFormat::from_str("json");
    assert!(matches!(format, Some(ReportFormat::Json)));
}

#[test]
fn test_report_format_from_str_csv() {
    let format = ReportFormat::from_str("csv");
    assert!(matches!(format, Some(ReportFormat::Csv)));
}

#[test]
fn test_report_format_from_str_markdown() {
    assert!(matches!(
        ReportFormat::from_str("markdown"),
        Some(ReportFormat::Markdown)
    ));
    assert!(matches!(
        ReportFormat::from_str("md"),
        Some(ReportFormat::Markdown)
    ));
}

#[test]
fn test_report_format_from_str_case_insensitive() {
    assert!(matches!(
        ReportFormat::from_str("TEXT"),
        Some(ReportFormat::Text)
    ));
    assert!(matches!(
        ReportFormat::from_str("Json"),
        Some(ReportFormat::Json)
    ));
}

#[test]
fn test_report_format_from_str_invalid() {
    assert!(ReportFormat::from_str("html").is_none());
    assert!(ReportFormat::from_str("pdf").is_none());
}

// ============================================================================
// Entry Ordering and Rounding Tests
// ============================================================================

#[test]
fn test_entries_sorted_lexicographically() {
    let entries = ranked_entries(&sample_distribution());
    let pages: Vec<&str> = entries.iter().map(|e| e.page.as_str()).collect();
    assert_eq!(pages, vec!["a.html", "b.html"]);
}

#[test]
fn test_entries_rounded_to_display_precision() {
    assert_eq!(DISPLAY_PRECISION, 4);
    let entries = ranked_entries(&sample_distribution());
    assert_eq!(entries[0].rank, 0.6491);
    assert_eq!(entries[1].rank, 0.3509);
}

#[test]
fn test_report_does_not_mutate_distribution() {
    let dist = sample_distribution();
    let before = dist.clone();
    let _report = RankReport::new(RankMethod::Iteration, 0.85, None, &dist);
    assert_eq!(dist, before);
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_report_titles() {
    let dist = sample_distribution();
    let sampling = RankReport::new(RankMethod::Sampling, 0.85, Some(10_000), &dist);
    let iteration = RankReport::new(RankMethod::Iteration, 0.85, None, &dist);

    assert_eq!(
        sampling.title(),
        "PageRank Results from Sampling (n = 10000)"
    );
    assert_eq!(iteration.title(), "PageRank Results from Iteration");
}

#[test]
fn test_render_text() {
    let report = RankReport::new(RankMethod::Iteration, 0.85, None, &sample_distribution());
    let text = render_report(&report, &ReportFormat::Text);

    assert!(text.starts_with("PageRank Results from Iteration\n"));
    assert!(text.contains("  a.html: 0.6491\n"));
    assert!(text.contains("  b.html: 0.3509\n"));
}

#[test]
fn test_render_json_round_trips() {
    let report = RankReport::new(
        RankMethod::Sampling,
        0.85,
        Some(500),
        &sample_distribution(),
    );
    let json = render_report(&report, &ReportFormat::Json);

    let parsed: RankReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.entries, report.entries);
    assert_eq!(parsed.samples, Some(500));
}

#[test]
fn test_render_csv() {
    let report = RankReport::new(RankMethod::Iteration, 0.85, None, &sample_distribution());
    let csv = render_report(&report, &ReportFormat::Csv);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "page,rank");
    assert_eq!(lines[1], "a.html,0.6491");
    assert_eq!(lines[2], "b.html,0.3509");
}

#[test]
fn test_render_markdown() {
    let report = RankReport::new(RankMethod::Iteration, 0.85, None, &sample_distribution());
    let md = render_report(&report, &ReportFormat::Markdown);

    assert!(md.starts_with("## PageRank Results from Iteration\n"));
    assert!(md.contains("| Page | Rank |"));
    assert!(md.contains("| a.html | 0.6491 |"));
}

#[test]
fn test_generated_at_is_optional() {
    let report = RankReport::new(RankMethod::Iteration, 0.85, None, &sample_distribution());
    let json = render_report(&report, &ReportFormat::Json);
    assert!(!json.contains("generated_at"));

    let stamped = report.with_generated_at("2026-08-08T00:00:00Z".to_string());
    let json = render_report(&stamped, &ReportFormat::Json);
    assert!(json.contains("generated_at"));
}

#[test]
fn test_method_labels() {
    assert_eq!(RankMethod::Sampling.as_str(), "sampling");
    assert_eq!(RankMethod::Iteration.as_str(), "iteration");
}
