use anyhow::Result;
use log2::debug;
use std::collections::HashMap;

use super::{check_damping, check_graph};
use crate::corpus::LinkGraph;

/// Solve the PageRank equations by synchronous power iteration.
///
/// Ranks start at 1/N and every round recomputes each page's rank from the
/// previous round's full distribution. A dangling page spreads its rank over
/// the whole corpus, the same convention `transition` uses, so no rank mass
/// is lost. Converged once no page moves more than `tolerance` in a round;
/// errors if `max_iterations` rounds pass without converging.
pub fn iterate_pagerank(
    graph: &LinkGraph,
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<HashMap<String, f64>> {
    check_graph(graph)?;
    check_damping(damping)?;
    if tolerance <= 0.0 {
        anyhow::bail!("tolerance must be positive, got {}", tolerance);
    }
    if max_iterations < 1 {
        anyhow::bail!("max_iterations must be at least 1, got {}", max_iterations);
    }

    let n = graph.len() as f64;
    let mut ranks: HashMap<String, f64> = graph.keys().map(|p| (p.clone(), 1.0 / n)).collect();

    // Invert the graph once so each round can look up who links to a page
    let mut incoming: HashMap<&str, Vec<&str>> =
        graph.keys().map(|p| (p.as_str(), Vec::new())).collect();
    for (page, links) in graph {
        for link in links {
            if let Some(sources) = incoming.get_mut(link.as_str()) {
                sources.push(page.as_str());
            }
        }
    }
    let dangling: Vec<&str> = graph
        .iter()
        .filter(|(_, links)| links.is_empty())
        .map(|(page, _)| page.as_str())
        .collect();

    for round in 1..=max_iterations {
        let dangling_mass: f64 = dangling.iter().map(|page| ranks[*page]).sum();
        let mut next = HashMap::with_capacity(ranks.len());
        let mut max_delta: f64 = 0.0;

        for page in graph.keys() {
            let mut rank = (1.0 - damping) / n + damping * dangling_mass / n;
            for source in &incoming[page.as_str()] {
                rank += damping * ranks[*source] / graph[*source].len() as f64;
            }
            max_delta = max_delta.max((rank - ranks[page]).abs());
            next.insert(page.clone(), rank);
        }

        ranks = next;
        if max_delta < tolerance {
            debug!("Converged after {} rounds (max delta {})", round, max_delta);
            return Ok(ranks);
        }
    }

    anyhow::bail!("pagerank did not converge within {} iterations", max_iterations)
}
