use crate::config::check_damping;
use crate::error::Result;
use crate::graph::LinkGraph;
use crate::transition::Distribution;
use std::collections::BTreeMap;
use tracing::debug;

/// Sweep-to-sweep change below which the iteration is considered converged.
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Estimate page ranks by iterating the PageRank recurrence to a fixed point.
///
/// Every page starts at `1 / N`. Each sweep recomputes all ranks from the
/// previous sweep's vector:
///
/// ```text
/// PR(p) = (1 - d) / N + d * (sum over i linking to p of PR(i) / L(i)
///                            + sum over dangling i of PR(i) / N)
/// ```
///
/// A dangling page is treated as linking uniformly to every page, itself
/// included, so no rank mass leaks. Iteration stops once no page moved by
/// more than [`CONVERGENCE_THRESHOLD`] in the latest sweep. The computation
/// is deterministic: the same graph and damping always produce the same
/// vector.
pub fn iterate_pagerank(graph: &LinkGraph, damping: f64) -> Result<Distribution> {
    check_damping(damping)?;

    let n = graph.page_count() as f64;
    let mut ranks: Distribution = graph.pages().map(|p| (p.to_string(), 1.0 / n)).collect();
    let mut deltas: BTreeMap<String, f64> =
        graph.pages().map(|p| (p.to_string(), f64::INFINITY)).collect();
    let mut sweeps = 0usize;

    while deltas.values().any(|&delta| delta > CONVERGENCE_THRESHOLD) {
        // dangling mass is shared uniformly, so it folds into the base term
        let dangling_mass: f64 = graph.dangling_pages().map(|p| ranks[p]).sum();
        let base = (1.0 - damping) / n + damping * dangling_mass / n;

        let mut next: Distribution = graph.pages().map(|p| (p.to_string(), base)).collect();

        for page in graph.pages() {
            let degree = graph.out_degree(page);
            if degree == 0 {
                continue;
            }
            let share = damping * ranks[page] / degree as f64;
            for target in graph.links(page) {
                if let Some(rank) = next.get_mut(target) {
                    *rank += share;
                }
            }
        }

        for (page, delta) in deltas.iter_mut() {
            *delta = (next[page.as_str()] - ranks[page.as_str()]).abs();
        }
        ranks = next;
        sweeps += 1;

        let max_delta = deltas.values().cloned().fold(0.0, f64::max);
        debug!("Sweep {}: max delta {:.6}", sweeps, max_delta);
    }

    debug!("Converged after {} sweeps", sweeps);
    Ok(ranks)
}
