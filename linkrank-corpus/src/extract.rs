use scraper::{Html, Selector};
use url::Url;

/// Extract corpus-local link targets from a page's markup.
///
/// Every `a[href]` element is considered; hrefs that cannot name a page in
/// a local corpus are skipped. Duplicates are preserved so callers decide
/// how to aggregate.
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let link_selector = Selector::parse("a[href]").unwrap();
    let mut links = Vec::new();

    for element in document.select(&link_selector) {
        if let Some(href) = element.value().attr("href")
            && let Some(target) = normalize_href(href)
        {
            links.push(target);
        }
    }

    links
}

/// Reduce an href to a corpus page name, or None for hrefs that point
/// outside a local corpus.
fn normalize_href(href: &str) -> Option<String> {
    // Skip empty, fragment-only, javascript:, mailto:, tel:, etc.
    if href.is_empty()
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with('#')
    {
        return None;
    }

    // an href that parses as an absolute URL leaves the corpus
    if Url::parse(href).is_ok() {
        return None;
    }

    // keep the page name, drop any query or fragment suffix
    let target = href.split(['?', '#']).next().unwrap_or_default();
    if target.is_empty() {
        None
    } else {
        Some(target.to_string())
    }
}
