use tourbook_core::{format_location, Dataset};
use tourbook_search::QueryEngine;

pub fn run(dataset: &Dataset, query: &str) {
    let concerts = QueryEngine::new(dataset).search_by_location(query);

    if concerts.is_empty() {
        println!("No concerts at a location matching \"{}\"", query.trim());
        return;
    }

    for concert in &concerts {
        println!(
            "  {} - {} ({})",
            concert.artist_name,
            format_location(&concert.location),
            concert.dates.join(", ")
        );
    }
    println!("\n{} concert(s)", concerts.len());
}
