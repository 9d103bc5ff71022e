//! Concert-level searches over the positional artist↔relation join.

use tourbook_core::dataset::flatten;
use tourbook_core::model::Concert;
use tourbook_core::Dataset;

use crate::text::{contains_folded, fold_query};

/// One concert per (artist, location) pair whose raw slug contains
/// `query`, case-insensitively.
///
/// Artists are visited in source order and paired with relations by
/// position; locations follow each relation's mapping order. A blank
/// query matches every tour stop.
pub fn search_by_location(dataset: &Dataset, query: &str) -> Vec<Concert> {
    let query = fold_query(query);
    dataset
        .tour_pairs()
        .flat_map(|(artist, relation)| flatten(artist, relation))
        .filter(|concert| contains_folded(&concert.location, &query))
        .collect()
}
