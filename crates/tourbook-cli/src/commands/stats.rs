use anyhow::{Context, Result};
use tourbook_core::Dataset;
use tourbook_search::QueryEngine;

pub fn run(dataset: &Dataset, top: usize, json: bool) -> Result<()> {
    let stats = QueryEngine::new(dataset).concert_stats(top);

    if json {
        let out = serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?;
        println!("{out}");
        return Ok(());
    }

    println!("\n📊 Tour Statistics\n");
    println!("  Artists:   {}", stats.artist_count);
    println!("  Concerts:  {}", stats.concert_count);
    println!("  Locations: {}", stats.location_count);
    println!("  Countries: {}", stats.country_count);

    if !stats.top_countries.is_empty() {
        println!("\n  Top countries:");
        for (rank, (country, count)) in stats.top_countries.iter().enumerate() {
            println!("    {}. {} ({} stop(s))", rank + 1, country.to_uppercase(), count);
        }
    }

    Ok(())
}
