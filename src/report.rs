use std::collections::HashMap;

/// Print a labeled rank distribution, one page per line, sorted by name.
pub fn print_ranks(label: &str, ranks: &HashMap<String, f64>) {
    println!("{}", label);
    let mut pages: Vec<&String> = ranks.keys().collect();
    pages.sort();
    for page in pages {
        println!("  {}: {:.4}", page, ranks[page.as_str()]);
    }
}
