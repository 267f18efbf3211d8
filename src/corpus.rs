use anyhow::{Context, Result, anyhow};
use log2::{debug, info};
use scraper::{Html, Selector};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Outbound links per page, keyed by file name. Targets always exist as keys;
/// a page with no surviving links keeps an empty set.
pub type LinkGraph = HashMap<String, HashSet<String>>;

/// Extract the href targets of all `<a>` elements on one page.
fn extract_links(html: &str) -> Result<HashSet<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a")
        .map_err(|e| anyhow!("Failed to parse <a> selector: {}", e))?;

    let mut found_links = HashSet::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            found_links.insert(href.to_string());
        }
    }

    Ok(found_links)
}

/// Parse a directory of HTML pages into a link graph.
/// Self-links and links pointing outside the corpus are dropped.
pub fn load(directory: &Path) -> Result<LinkGraph> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("Failed to read corpus directory {:?}", directory))?;

    let mut pages: LinkGraph = HashMap::new();
    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!("Skipped non-UTF-8 file name {:?}", file_name);
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }

        let contents = fs::read_to_string(entry.path())
            .with_context(|| format!("Failed to read page {:?}", entry.path()))?;
        let mut links = extract_links(&contents)?;
        links.remove(name);
        debug!("Found {} links on page {}", links.len(), name);
        pages.insert(name.to_string(), links);
    }

    if pages.is_empty() {
        anyhow::bail!("No .html pages found in {:?}", directory);
    }

    // Only keep links to other pages in the corpus
    let names: HashSet<String> = pages.keys().cloned().collect();
    for links in pages.values_mut() {
        links.retain(|link| names.contains(link));
    }

    info!("Loaded {} pages from {:?}", pages.len(), directory);
    Ok(pages)
}
