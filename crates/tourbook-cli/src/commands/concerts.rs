use anyhow::{Context, Result};
use tourbook_core::model::ArtistId;
use tourbook_core::Dataset;
use tourbook_search::group_by_location;

/// Print the concerts of artist `id`, grouped by location.
///
/// The positional join is used unless `by_id` is set.
pub fn run(dataset: &Dataset, id: i64, by_id: bool, json: bool) -> Result<()> {
    let id = ArtistId::new(id);
    let artist = dataset.require_artist(id)?;

    let concerts = if by_id {
        dataset.concerts_for_artist_by_id(id)
    } else {
        dataset.concerts_for_artist(id)
    };

    if json {
        let out = serde_json::to_string_pretty(&concerts).context("Failed to serialize concerts")?;
        println!("{out}");
        return Ok(());
    }

    println!("\n🎤 {} ({} concert location(s))\n", artist.name, concerts.len());
    if concerts.is_empty() {
        println!("  No concerts on record");
        return Ok(());
    }

    for group in group_by_location(&concerts) {
        println!("  📍 {}", group.location);
        for date in &group.dates {
            println!("      {date}");
        }
    }

    Ok(())
}
