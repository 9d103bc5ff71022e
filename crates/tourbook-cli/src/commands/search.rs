use tourbook_core::Dataset;
use tourbook_search::QueryEngine;

/// Print universal-search suggestions for `query`, `limit` at most.
pub fn run(dataset: &Dataset, query: &str, limit: Option<usize>) {
    let engine = QueryEngine::new(dataset);
    let hits = match limit {
        Some(limit) => engine.suggestions(query, limit),
        None => engine.universal_search(query),
    };

    if hits.is_empty() {
        println!("No matches for \"{}\"", query.trim());
        return;
    }

    for hit in &hits {
        println!("  [{:<8}] {}", hit.category.as_str(), hit.label);
    }
    println!("\n{} suggestion(s)", hits.len());
}
