use std::collections::HashMap;

use crate::corpus::LinkGraph;

/// One-step distribution of the random surfer sitting on `page`.
///
/// With probability `damping` the surfer follows one of the page's outbound
/// links, chosen uniformly; otherwise it jumps to a page chosen uniformly
/// from the whole corpus. A dangling page is treated as linking to every
/// page, so its distribution is uniform.
pub fn transition(graph: &LinkGraph, page: &str, damping: f64) -> HashMap<String, f64> {
    let n = graph.len() as f64;

    match graph.get(page) {
        Some(links) if !links.is_empty() => {
            let follow = damping / links.len() as f64;
            let jump = (1.0 - damping) / n;
            graph
                .keys()
                .map(|p| {
                    let probability = if links.contains(p) { follow + jump } else { jump };
                    (p.clone(), probability)
                })
                .collect()
        }
        // No outbound links: every page is equally likely
        _ => graph.keys().map(|p| (p.clone(), 1.0 / n)).collect(),
    }
}
