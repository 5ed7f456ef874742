use anyhow::{Context, Result};
use chrono::Utc;
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use linkrank_core::report::DISPLAY_PRECISION;
use linkrank_core::{
    DEFAULT_DAMPING, DEFAULT_SAMPLES, LinkGraph, RankConfig, RankMethod, RankReport, ReportFormat,
    iterate_pagerank, render_report, sample_pagerank,
};
use linkrank_corpus::load_corpus;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// Helper functions for the rank handler

/// Load a corpus directory and build the link graph from it.
pub fn load_corpus_graph(dir: &Path) -> Result<LinkGraph> {
    let raw = load_corpus(dir)
        .with_context(|| format!("Failed to load corpus from {}", dir.display()))?;
    let graph = LinkGraph::from_pages(raw)
        .with_context(|| format!("Corpus at {} does not form a usable graph", dir.display()))?;
    Ok(graph)
}

/// RNG for the sampling walk: seeded when requested, OS entropy otherwise.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Render both estimators' reports as one document.
pub fn render_comparison(
    sampling: &RankReport,
    iteration: &RankReport,
    format: &ReportFormat,
) -> String {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(&[sampling, iteration])
            .expect("rank reports serialize to JSON"),
        ReportFormat::Csv => {
            let mut out = String::from("method,page,rank\n");
            for report in [sampling, iteration] {
                for entry in &report.entries {
                    out.push_str(&format!(
                        "{},{},{:.prec$}\n",
                        report.method.as_str(),
                        entry.page,
                        entry.rank,
                        prec = DISPLAY_PRECISION as usize
                    ));
                }
            }
            out
        }
        _ => format!(
            "{}\n{}",
            render_report(sampling, format),
            render_report(iteration, format)
        ),
    }
}

pub fn handle_rank(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let corpus_dir = sub_matches.get_one::<PathBuf>("CORPUS").unwrap();
    let damping = *sub_matches
        .get_one::<f64>("damping")
        .unwrap_or(&DEFAULT_DAMPING);
    let samples = *sub_matches
        .get_one::<usize>("samples")
        .unwrap_or(&DEFAULT_SAMPLES);
    let seed = sub_matches.get_one::<u64>("seed").copied();
    let format = sub_matches
        .get_one::<String>("format")
        .and_then(|s| ReportFormat::from_str(s))
        .unwrap_or(ReportFormat::Text);
    let output = sub_matches.get_one::<PathBuf>("output");

    let config = RankConfig { damping, samples };
    if let Err(e) = config.validate() {
        eprintln!("{} {}", "✗".red().bold(), e);
        std::process::exit(1);
    }

    let graph = match load_corpus_graph(corpus_dir) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    println!(
        "\n{} Ranking {} pages from {}",
        "→".blue(),
        graph.page_count(),
        corpus_dir.display().to_string().bright_white()
    );
    println!("Damping factor: {}", damping);
    println!("Walk length: {}", samples);
    match seed {
        Some(seed) => println!("Seed: {}\n", seed),
        None => println!("Seed: OS entropy\n"),
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    spinner.set_message(format!("Surfing {} random steps...", samples));
    let mut rng = build_rng(seed);
    let sampled = match sample_pagerank(&graph, damping, samples, &mut rng) {
        Ok(ranks) => ranks,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} Sampling failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    spinner.set_message("Iterating to a fixed point...");
    let iterated = match iterate_pagerank(&graph, damping) {
        Ok(ranks) => ranks,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} Iteration failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };
    spinner.finish_and_clear();

    let generated_at = Utc::now().to_rfc3339();
    let sampling_report = RankReport::new(RankMethod::Sampling, damping, Some(samples), &sampled)
        .with_generated_at(generated_at.clone());
    let iteration_report = RankReport::new(RankMethod::Iteration, damping, None, &iterated)
        .with_generated_at(generated_at);

    let rendered = render_comparison(&sampling_report, &iteration_report, &format);

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                eprintln!(
                    "{} Failed to write report to {}: {}",
                    "✗".red().bold(),
                    path.display(),
                    e
                );
                std::process::exit(1);
            }
            println!(
                "{} Report saved to {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            );
        }
        None => print!("{}", rendered),
    }
}

pub fn handle_graph(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let corpus_dir = sub_matches.get_one::<PathBuf>("CORPUS").unwrap();

    let graph = match load_corpus_graph(corpus_dir) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    println!(
        "\n{} {} pages in {}\n",
        "→".blue(),
        graph.page_count(),
        corpus_dir.display().to_string().bright_white()
    );

    for page in graph.pages() {
        let links: Vec<&str> = graph.links(page).collect();
        if links.is_empty() {
            println!("  {} {}", page.bright_white(), "(dangling)".yellow());
        } else {
            println!("  {} -> {}", page.bright_white(), links.join(", "));
        }
    }
}
