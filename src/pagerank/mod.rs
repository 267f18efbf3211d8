pub mod model;
pub mod sample;
pub mod iterate;


pub use model::transition;
pub use sample::sample_pagerank;
pub use iterate::iterate_pagerank;

use crate::corpus::LinkGraph;
use anyhow::Result;

/// Checks the graph both estimators run on: it must be non-empty and every
/// link target must itself be a page in the graph.
pub(crate) fn check_graph(graph: &LinkGraph) -> Result<()> {
    if graph.is_empty() {
        anyhow::bail!("link graph is empty");
    }
    for (page, links) in graph {
        if let Some(missing) = links.iter().find(|link| !graph.contains_key(*link)) {
            anyhow::bail!("page {} links to {} which is not in the corpus", page, missing);
        }
    }
    Ok(())
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&damping) {
        anyhow::bail!("damping must be between 0 and 1, got {}", damping);
    }
    Ok(())
}
