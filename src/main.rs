use anyhow::Result;
use log2::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

use corpusrank::{config, corpus, pagerank, report};

/// Indicates start time of a run, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

fn main() -> Result<()> {
    let _ = *START_TIME;
    let cfg = config::Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        .module_filter(|module| module.starts_with("corpusrank")) // include only modules having this pattern
        .compress(false) // compress output
        .level(cfg.log_level.to_string())
        .start();

    match corpus::load(&cfg.corpus) {
        Ok(graph) => {
            debug!("Corpus loaded with {} pages", graph.len());

            let mut rng = match cfg.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let sampled = pagerank::sample_pagerank(&graph, cfg.damping, cfg.samples, &mut rng)?;
            report::print_ranks(
                &format!("PageRank Results from Sampling (n = {})", cfg.samples),
                &sampled,
            );

            let iterated =
                pagerank::iterate_pagerank(&graph, cfg.damping, cfg.tolerance, cfg.max_iterations)?;
            report::print_ranks("PageRank Results from Iteration", &iterated);

            info!("Done in {:?}", START_TIME.elapsed());
        }
        Err(e) => {
            error!("Failed to load corpus: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
