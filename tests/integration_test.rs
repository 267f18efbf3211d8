use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::Path;

use corpusrank::{corpus, pagerank};

fn write_page(dir: &Path, name: &str, links: &[&str]) {
    let body: String = links
        .iter()
        .map(|link| format!(r#"<a href="{}">{}</a>"#, link, link))
        .collect();
    fs::write(dir.join(name), format!("<html><body>{}</body></html>", body)).unwrap();
}

#[test]
fn test_rank_small_corpus_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    write_page(dir.path(), "1.html", &["2.html"]);
    write_page(dir.path(), "2.html", &["1.html", "3.html"]);
    write_page(dir.path(), "3.html", &["2.html", "4.html"]);
    write_page(dir.path(), "4.html", &["2.html"]);

    let graph = corpus::load(dir.path())?;
    assert_eq!(graph.len(), 4);

    let mut rng = StdRng::seed_from_u64(42);
    let sampled = pagerank::sample_pagerank(&graph, 0.85, 20_000, &mut rng)?;
    let iterated = pagerank::iterate_pagerank(&graph, 0.85, 0.001, 1000)?;

    assert!((sampled.values().sum::<f64>() - 1.0).abs() < 1e-3);
    assert!((iterated.values().sum::<f64>() - 1.0).abs() < 1e-3);

    // Both estimators should agree on the ranking story: 2.html is the hub
    for page in graph.keys() {
        assert!(
            (sampled[page.as_str()] - iterated[page.as_str()]).abs() < 0.05,
            "estimators disagree on {}",
            page
        );
    }
    let top = iterated
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(page, _)| page.as_str());
    assert_eq!(top, Some("2.html"));

    Ok(())
}

#[test]
fn test_rank_corpus_with_dangling_page() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    // a.html links only to the outside world, so inside the corpus it dangles
    write_page(dir.path(), "a.html", &["https://example.com/elsewhere"]);
    write_page(dir.path(), "b.html", &["a.html"]);

    let graph = corpus::load(dir.path())?;
    assert!(graph["a.html"].is_empty());

    let iterated = pagerank::iterate_pagerank(&graph, 0.85, 0.001, 1000)?;
    assert!((iterated.values().sum::<f64>() - 1.0).abs() < 1e-3);

    let mut rng = StdRng::seed_from_u64(7);
    let sampled = pagerank::sample_pagerank(&graph, 0.85, 10_000, &mut rng)?;
    assert!((sampled.values().sum::<f64>() - 1.0).abs() < 1e-6);

    Ok(())
}

#[test]
fn test_missing_corpus_directory_is_an_error() {
    let result = corpus::load(Path::new("/no/such/corpus"));
    assert!(result.is_err());
}
