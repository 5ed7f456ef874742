use crate::error::{CorpusError, Result};
use crate::extract::extract_links;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Parse a directory of HTML pages into a raw page -> links mapping.
///
/// Every `*.html` file becomes a page keyed by its file name; other entries
/// are ignored. Self-references are removed here. Links naming pages that do
/// not exist in the corpus are kept as-is; graph construction drops them,
/// mirroring the two-phase filter of the page set.
pub fn load_corpus(dir: &Path) -> Result<BTreeMap<String, BTreeSet<String>>> {
    if !dir.is_dir() {
        return Err(CorpusError::NotADirectory(dir.to_path_buf()));
    }

    let mut pages = BTreeMap::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".html") || !path.is_file() {
            debug!("Skipping non-page entry {}", path.display());
            continue;
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Skipping unreadable page {}: {}", path.display(), e);
                continue;
            }
        };

        let links: BTreeSet<String> = extract_links(&contents)
            .into_iter()
            .filter(|target| target != name)
            .collect();
        debug!("{}: {} outgoing links", name, links.len());
        pages.insert(name.to_string(), links);
    }

    info!("Loaded {} pages from {}", pages.len(), dir.display());
    Ok(pages)
}
