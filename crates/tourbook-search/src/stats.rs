//! Aggregate statistics over the tour catalogue.

use serde::Serialize;

use tourbook_core::{country_of, Dataset, Tally};

/// The `n` entries with the highest counts, highest first.
///
/// The sort is stable, so entries with equal counts keep the order in
/// which `counts` yields them. Fewer than `n` entries are returned whole.
pub fn top_entities<K, I>(counts: I, n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = (K, usize)>,
    K: Into<String>,
{
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(key, count)| (key.into(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Catalogue-wide concert figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcertStats {
    pub artist_count: usize,

    /// Sum of all dates across all relations.
    pub concert_count: usize,

    /// Distinct raw location slugs.
    pub location_count: usize,

    /// Distinct countries (last slug segment).
    pub country_count: usize,

    /// Countries ranked by how many tour stops they host.
    pub top_countries: Vec<(String, usize)>,
}

/// Compute [`ConcertStats`] over every relation in the dataset.
///
/// Relations are counted whether or not they line up with an artist.
pub fn concert_stats(dataset: &Dataset, top_n: usize) -> ConcertStats {
    let mut concert_count = 0;
    let mut locations = Tally::new();
    let mut countries = Tally::new();

    for relation in dataset.relations() {
        concert_count += relation.dates_locations.date_count();
        for slug in relation.dates_locations.slugs() {
            locations.add(slug);
            countries.add(country_of(slug));
        }
    }

    ConcertStats {
        artist_count: dataset.artists().len(),
        concert_count,
        location_count: locations.len(),
        country_count: countries.len(),
        top_countries: top_entities(countries.into_entries(), top_n),
    }
}
