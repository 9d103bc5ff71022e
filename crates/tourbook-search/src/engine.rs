//! A borrowed, stateless view of a dataset exposing every query.

use tourbook_core::model::{Artist, ArtistId, Concert, Relation};
use tourbook_core::Dataset;

use crate::stats::{concert_stats, ConcertStats};
use crate::tour::{tour_map, ArtistTour};
use crate::universal::{suggestions, universal_search, SearchHit};
use crate::{artists, concerts};

/// Entry point for querying a loaded [`Dataset`].
///
/// Cheap to construct and `Copy`; holds nothing but the borrow. Artist
/// queries run over the whole collection. To narrow an earlier result
/// further, call the free functions in [`crate::artists`] on it.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryEngine<'a> {
    #[must_use]
    pub const fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    #[must_use]
    pub const fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn search_by_name(&self, query: &str) -> Vec<&'a Artist> {
        artists::search_by_name(self.dataset.artists(), query)
    }

    pub fn search_by_member(&self, query: &str) -> Vec<&'a Artist> {
        artists::search_by_member(self.dataset.artists(), query)
    }

    pub fn search_artists(&self, query: &str) -> Vec<&'a Artist> {
        artists::search_artists(self.dataset.artists(), query)
    }

    pub fn search_by_album(&self, query: &str) -> Vec<&'a Artist> {
        artists::search_by_album(self.dataset.artists(), query)
    }

    pub fn search_by_creation_year(&self, year: i32) -> Vec<&'a Artist> {
        artists::search_by_creation_year(self.dataset.artists(), year)
    }

    pub fn filter_by_creation_year_range(&self, min: i32, max: i32) -> Vec<&'a Artist> {
        artists::filter_by_creation_year_range(self.dataset.artists(), min, max)
    }

    pub fn filter_by_member_count(&self, min: usize, max: usize) -> Vec<&'a Artist> {
        artists::filter_by_member_count(self.dataset.artists(), min, max)
    }

    pub fn search_by_location(&self, query: &str) -> Vec<Concert> {
        concerts::search_by_location(self.dataset, query)
    }

    pub fn universal_search(&self, query: &str) -> Vec<SearchHit<'a>> {
        universal_search(self.dataset, query)
    }

    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<SearchHit<'a>> {
        suggestions(self.dataset, query, limit)
    }

    pub fn relation_by_artist_id(&self, id: ArtistId) -> Option<&'a Relation> {
        self.dataset.relation_by_artist_id(id)
    }

    pub fn relation_by_position(&self, artist_index: usize) -> Option<&'a Relation> {
        self.dataset.relation_by_position(artist_index)
    }

    pub fn concerts_for_artist(&self, id: ArtistId) -> Vec<Concert> {
        self.dataset.concerts_for_artist(id)
    }

    pub fn tour_map(&self, name_query: &str, location_filter: Option<&str>) -> Vec<ArtistTour<'a>> {
        tour_map(self.dataset, name_query, location_filter)
    }

    pub fn concert_stats(&self, top_n: usize) -> ConcertStats {
        concert_stats(self.dataset, top_n)
    }
}
