// Report generation from estimator output

use crate::transition::Distribution;
use serde::{Deserialize, Serialize};

/// Decimal digits shown for each rank value.
pub const DISPLAY_PRECISION: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RankMethod {
    Sampling,
    Iteration,
}

impl RankMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankMethod::Sampling => "sampling",
            RankMethod::Iteration => "iteration",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub page: String,
    pub rank: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankReport {
    pub method: RankMethod,
    pub damping: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    pub entries: Vec<RankEntry>,
}

impl RankReport {
    /// Snapshot an estimator's output: entries ordered lexicographically by
    /// page identifier, values rounded for display. The distribution itself
    /// is left untouched.
    pub fn new(
        method: RankMethod,
        damping: f64,
        samples: Option<usize>,
        ranks: &Distribution,
    ) -> Self {
        Self {
            method,
            damping,
            samples,
            generated_at: None,
            entries: ranked_entries(ranks),
        }
    }

    pub fn with_generated_at(mut self, timestamp: String) -> Self {
        self.generated_at = Some(timestamp);
        self
    }

    pub fn title(&self) -> String {
        match (self.method, self.samples) {
            (RankMethod::Sampling, Some(n)) => {
                format!("PageRank Results from Sampling (n = {})", n)
            }
            (RankMethod::Sampling, None) => "PageRank Results from Sampling".to_string(),
            (RankMethod::Iteration, _) => "PageRank Results from Iteration".to_string(),
        }
    }
}

/// Ordered (page, rank) pairs for display: lexicographic by identifier,
/// rounded to [`DISPLAY_PRECISION`] digits.
pub fn ranked_entries(ranks: &Distribution) -> Vec<RankEntry> {
    let scale = 10f64.powi(DISPLAY_PRECISION as i32);
    ranks
        .iter()
        .map(|(page, rank)| RankEntry {
            page: page.clone(),
            rank: (rank * scale).round() / scale,
        })
        .collect()
}

/// Render a report in the requested format.
pub fn render_report(report: &RankReport, format: &ReportFormat) -> String {
    match format {
        ReportFormat::Text => render_text(report),
        ReportFormat::Json => render_json(report),
        ReportFormat::Csv => render_csv(report),
        ReportFormat::Markdown => render_markdown(report),
    }
}

fn render_text(report: &RankReport) -> String {
    let mut out = String::new();
    out.push_str(&report.title());
    out.push('\n');
    for entry in &report.entries {
        out.push_str(&format!(
            "  {}: {:.prec$}\n",
            entry.page,
            entry.rank,
            prec = DISPLAY_PRECISION as usize
        ));
    }
    out
}

fn render_json(report: &RankReport) -> String {
    // plain data structs, serialization cannot fail
    serde_json::to_string_pretty(report).expect("rank report serializes to JSON")
}

fn render_csv(report: &RankReport) -> String {
    let mut out = String::from("page,rank\n");
    for entry in &report.entries {
        out.push_str(&format!(
            "{},{:.prec$}\n",
            entry.page,
            entry.rank,
            prec = DISPLAY_PRECISION as usize
        ));
    }
    out
}

fn render_markdown(report: &RankReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("## {}\n\n", report.title()));
    out.push_str("| Page | Rank |\n");
    out.push_str("|------|------|\n");
    for entry in &report.entries {
        out.push_str(&format!(
            "| {} | {:.prec$} |\n",
            entry.page,
            entry.rank,
            prec = DISPLAY_PRECISION as usize
        ));
    }
    out
}
