use anyhow::{Context, Result, anyhow};
use log2::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

use super::model::transition;
use super::{check_damping, check_graph};
use crate::corpus::LinkGraph;

/// Estimate PageRank with a single long random walk.
///
/// The first page is drawn uniformly from the corpus; every later page is
/// drawn from the transition distribution of the page before it. Visit
/// counts over all `samples` draws, divided by `samples`, are the estimate.
pub fn sample_pagerank(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    rng: &mut impl Rng,
) -> Result<HashMap<String, f64>> {
    let counts = take_walk(graph, damping, samples, rng)?;
    Ok(counts
        .into_iter()
        .map(|(page, count)| (page, count as f64 / samples as f64))
        .collect())
}

/// Walk the graph for `samples` steps and tally visits per page. The
/// starting page counts as the first visit.
pub(crate) fn take_walk(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    rng: &mut impl Rng,
) -> Result<HashMap<String, usize>> {
    check_graph(graph)?;
    check_damping(damping)?;
    if samples < 1 {
        anyhow::bail!("samples must be at least 1, got {}", samples);
    }

    // Sorted so a seeded rng sees pages in the same order on every run
    let mut pages: Vec<&String> = graph.keys().collect();
    pages.sort();

    let mut counts: HashMap<String, usize> = graph.keys().map(|p| (p.clone(), 0)).collect();

    let mut current = (*pages.choose(rng).context("graph has no pages")?).clone();
    *counts.entry(current.clone()).or_insert(0) += 1;

    for _ in 1..samples {
        let distribution = transition(graph, &current, damping);
        let weighted: Vec<(&String, f64)> = pages.iter().map(|p| (*p, distribution[p.as_str()])).collect();
        let next = weighted
            .choose_weighted(rng, |(_, weight)| *weight)
            .map_err(|e| anyhow!("failed to draw next page: {}", e))?;
        current = next.0.clone();
        *counts.entry(current.clone()).or_insert(0) += 1;
    }

    debug!("Walk finished after {} steps", samples);
    Ok(counts)
}
