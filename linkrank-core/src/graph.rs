use crate::error::{RankError, Result};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Immutable directed link graph: page identifier -> set of link targets.
///
/// Ordered maps keep iteration stable, so seeded walks and rendered reports
/// reproduce exactly across runs. Construction enforces the graph invariants:
/// self-links are removed, links to pages outside the graph are dropped, and
/// an empty page set is rejected. A page whose outgoing set ends up empty is
/// a dangling page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGraph {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl LinkGraph {
    /// Build a graph from a raw page -> links mapping, applying the
    /// construction filters. Fails if the mapping has no pages at all.
    pub fn from_pages(raw: BTreeMap<String, BTreeSet<String>>) -> Result<Self> {
        if raw.is_empty() {
            return Err(RankError::InvalidGraph(
                "graph must contain at least one page".to_string(),
            ));
        }

        let known: BTreeSet<String> = raw.keys().cloned().collect();
        let mut pages = BTreeMap::new();
        let mut dropped = 0usize;

        for (page, links) in raw {
            let mut kept = BTreeSet::new();
            for target in links {
                if target != page && known.contains(&target) {
                    kept.insert(target);
                } else {
                    dropped += 1;
                }
            }
            pages.insert(page, kept);
        }

        if dropped > 0 {
            debug!("Dropped {} self-links or out-of-graph links", dropped);
        }

        Ok(Self { pages })
    }

    /// All page identifiers, in lexicographic order.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// Outgoing links of a page, in lexicographic order. Empty for dangling
    /// pages and for identifiers not in the graph.
    pub fn links(&self, page: &str) -> impl Iterator<Item = &str> {
        self.pages
            .get(page)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Number of outgoing links of a page (0 for dangling pages).
    pub fn out_degree(&self, page: &str) -> usize {
        self.pages.get(page).map_or(0, BTreeSet::len)
    }

    /// True for pages that exist in the graph but link nowhere.
    pub fn is_dangling(&self, page: &str) -> bool {
        self.pages.get(page).is_some_and(BTreeSet::is_empty)
    }

    /// All dangling pages, in lexicographic order.
    pub fn dangling_pages(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .filter(|(_, links)| links.is_empty())
            .map(|(page, _)| page.as_str())
    }
}
