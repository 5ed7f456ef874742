use crate::config::check_damping;
use crate::error::{RankError, Result};
use crate::graph::LinkGraph;
use std::collections::BTreeMap;

/// Probability mass per page. Every page in the originating graph has an
/// entry; values are non-negative.
pub type Distribution = BTreeMap<String, f64>;

/// Probability distribution over which page the random surfer visits next,
/// given the page it is currently on.
///
/// Every page receives the baseline mass `(1 - damping) / N`. If the current
/// page has outgoing links, each target additionally receives
/// `damping / out_degree`. For a dangling current page there is no link mass
/// to hand out, so the result is the bare baseline and sums to `1 - damping`
/// rather than 1 — callers sampling from it must weight by the actual total
/// (see the sampling estimator).
pub fn transition_model(graph: &LinkGraph, current: &str, damping: f64) -> Result<Distribution> {
    check_damping(damping)?;

    if !graph.contains(current) {
        return Err(RankError::UnknownPage(current.to_string()));
    }

    let n = graph.page_count() as f64;
    let baseline = (1.0 - damping) / n;
    let mut dist: Distribution = graph.pages().map(|p| (p.to_string(), baseline)).collect();

    let degree = graph.out_degree(current);
    if degree > 0 {
        let bonus = damping / degree as f64;
        for target in graph.links(current) {
            // every target is a graph page by construction
            if let Some(mass) = dist.get_mut(target) {
                *mass += bonus;
            }
        }
    }

    Ok(dist)
}
