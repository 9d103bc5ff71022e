use tourbook_core::Dataset;
use tourbook_search::QueryEngine;

pub fn run(dataset: &Dataset, artist: &str, location: Option<&str>) {
    let tours = QueryEngine::new(dataset).tour_map(artist, location);

    if tours.is_empty() {
        println!("No tours found");
        return;
    }

    for tour in &tours {
        println!("\n🎤 {}", tour.artist.name);
        for stop in &tour.stops {
            println!("  📍 {}", stop.location);
            for date in &stop.dates {
                println!("      {date}");
            }
        }
    }
}
