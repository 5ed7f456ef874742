use crate::config::{check_damping, check_samples};
use crate::error::Result;
use crate::graph::LinkGraph;
use crate::transition::{Distribution, transition_model};
use rand::Rng;
use tracing::debug;

/// Estimate page ranks by simulating a random surfer for `samples` steps.
///
/// The walk starts on a uniformly random page and each subsequent step draws
/// the next page from the transition model of the current one. Every visited
/// page is credited `1 / samples`, so the returned distribution sums to 1.
/// The estimate is statistical: larger walks reduce variance but individual
/// runs differ unless the caller seeds `rng`.
pub fn sample_pagerank<R: Rng>(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<Distribution> {
    check_damping(damping)?;
    check_samples(samples)?;

    let pages: Vec<&str> = graph.pages().collect();
    let credit = 1.0 / samples as f64;
    let mut ranks: Distribution = pages.iter().map(|p| (p.to_string(), 0.0)).collect();

    debug!(
        "Starting {}-step random walk over {} pages (damping {})",
        samples,
        pages.len(),
        damping
    );

    let mut current = pages[rng.random_range(0..pages.len())].to_string();
    *ranks.entry(current.clone()).or_insert(0.0) += credit;

    for _ in 1..samples {
        let dist = transition_model(graph, &current, damping)?;
        let next = weighted_choice(&dist, rng).to_string();
        *ranks.entry(next.clone()).or_insert(0.0) += credit;
        current = next;
    }

    debug!("Random walk complete");
    Ok(ranks)
}

/// Draw one page from a distribution, weighted by its entries.
///
/// Cumulative scan against the distribution's actual total, not an assumed
/// 1.0, so weight vectors that do not sum to 1 are implicitly renormalized.
/// The transition model emits exactly one such vector - the uniform baseline
/// of a dangling current page - and renormalizing it is the same as letting
/// the surfer restart on a uniformly random page.
fn weighted_choice<'a, R: Rng>(dist: &'a Distribution, rng: &mut R) -> &'a str {
    let total: f64 = dist.values().sum();
    let mut draw = rng.random::<f64>() * total;
    let mut chosen = "";

    for (page, weight) in dist {
        chosen = page.as_str();
        if draw < *weight {
            return chosen;
        }
        draw -= weight;
    }

    // rounding can leave a sliver of the draw past the last entry
    chosen
}
