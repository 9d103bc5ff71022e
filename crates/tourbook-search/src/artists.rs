//! Single-field artist searches and numeric filters.
//!
//! Each function accepts any iterator of `&Artist` and keeps the input
//! order, so the output of one query can be fed straight into another:
//!
//! ```
//! use tourbook_core::model::Artist;
//! use tourbook_search::artists::{filter_by_member_count, search_by_name};
//!
//! let artists = vec![
//!     Artist::new(1, "Queen").with_member("Freddie").with_member("Brian"),
//!     Artist::new(2, "Queens of the Stone Age").with_member("Josh"),
//! ];
//! let queens = search_by_name(&artists, "queen");
//! let bands = filter_by_member_count(queens, 2, 5);
//! assert_eq!(bands.len(), 1);
//! ```
//!
//! An empty (or blank) query means "no filter" and returns the input
//! unchanged. Inverted ranges (`min > max`) match nothing.

use tourbook_core::model::Artist;

use crate::text::{contains_folded, fold_query};

fn retain<'a, I, F>(artists: I, mut keep: F) -> Vec<&'a Artist>
where
    I: IntoIterator<Item = &'a Artist>,
    F: FnMut(&Artist) -> bool,
{
    artists.into_iter().filter(|artist| keep(artist)).collect()
}

/// Artists whose name contains `query`, case-insensitively.
pub fn search_by_name<'a, I>(artists: I, query: &str) -> Vec<&'a Artist>
where
    I: IntoIterator<Item = &'a Artist>,
{
    let query = fold_query(query);
    retain(artists, |artist| contains_folded(&artist.name, &query))
}

/// Artists with at least one member whose name contains `query`.
///
/// An artist is listed once however many of its members match.
pub fn search_by_member<'a, I>(artists: I, query: &str) -> Vec<&'a Artist>
where
    I: IntoIterator<Item = &'a Artist>,
{
    let query = fold_query(query);
    retain(artists, |artist| has_member_matching(artist, &query))
}

/// Artists whose name or any member name contains `query`.
pub fn search_artists<'a, I>(artists: I, query: &str) -> Vec<&'a Artist>
where
    I: IntoIterator<Item = &'a Artist>,
{
    let query = fold_query(query);
    retain(artists, |artist| {
        contains_folded(&artist.name, &query) || has_member_matching(artist, &query)
    })
}

/// Artists whose first-album label contains `query` verbatim.
///
/// Matching is raw, case-sensitive containment: no date parsing, so
/// `"1973"` finds `"14-12-1973"` but `"1973-12"` does not.
pub fn search_by_album<'a, I>(artists: I, query: &str) -> Vec<&'a Artist>
where
    I: IntoIterator<Item = &'a Artist>,
{
    let query = query.trim();
    retain(artists, |artist| artist.first_album.contains(query))
}

/// Artists formed in exactly `year`.
pub fn search_by_creation_year<'a, I>(artists: I, year: i32) -> Vec<&'a Artist>
where
    I: IntoIterator<Item = &'a Artist>,
{
    retain(artists, |artist| artist.creation_date == year)
}

/// Artists formed between `min` and `max`, both inclusive.
pub fn filter_by_creation_year_range<'a, I>(artists: I, min: i32, max: i32) -> Vec<&'a Artist>
where
    I: IntoIterator<Item = &'a Artist>,
{
    retain(artists, |artist| (min..=max).contains(&artist.creation_date))
}

/// Artists with between `min` and `max` members, both inclusive.
pub fn filter_by_member_count<'a, I>(artists: I, min: usize, max: usize) -> Vec<&'a Artist>
where
    I: IntoIterator<Item = &'a Artist>,
{
    retain(artists, |artist| (min..=max).contains(&artist.member_count()))
}

fn has_member_matching(artist: &Artist, folded_query: &str) -> bool {
    artist
        .members
        .iter()
        .any(|member| contains_folded(member, folded_query))
}
