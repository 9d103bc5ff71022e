//! Universal search: one query fanned out across every searchable field.
//!
//! Hits are grouped by [`MatchCategory`] in a fixed order (name, member,
//! album, location) and listed in source order within each group. An
//! artist can appear several times (once per category, per matching
//! member, per matching location) but never twice for the same
//! `(category, value)` pair.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use tourbook_core::model::{Artist, ArtistId};
use tourbook_core::{format_location, Dataset};

use crate::text::{contains_folded, fold_query};

/// The field a universal-search hit matched on.
///
/// Variant order is presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchCategory {
    Name,
    Member,
    Album,
    Location,
}

impl MatchCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "artist",
            Self::Member => "member",
            Self::Album => "album",
            Self::Location => "location",
        }
    }
}

impl fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labelled universal-search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    pub category: MatchCategory,

    /// What distinguishes this hit within its category: the artist name,
    /// the member name, the album label, or the formatted location.
    pub value: String,

    /// Display text.
    pub label: String,
    pub artist: &'a Artist,
}

type HitKey = (MatchCategory, String, ArtistId);

#[derive(Debug, Default)]
struct Collector<'a> {
    seen: HashSet<HitKey>,
    buckets: [Vec<SearchHit<'a>>; 4],
}

impl<'a> Collector<'a> {
    fn push(&mut self, category: MatchCategory, value: String, label: String, artist: &'a Artist) {
        if self.seen.insert((category, value.clone(), artist.id)) {
            self.buckets[category as usize].push(SearchHit {
                category,
                value,
                label,
                artist,
            });
        }
    }

    fn finish(self) -> Vec<SearchHit<'a>> {
        self.buckets.into_iter().flatten().collect()
    }
}

/// Run `query` against names, members, album labels and tour locations.
///
/// A blank query returns nothing. Location hits use the positional
/// artist↔relation join and are keyed by formatted location, so slugs
/// that differ only in case or delimiter style collapse into one hit.
pub fn universal_search<'a>(dataset: &'a Dataset, query: &str) -> Vec<SearchHit<'a>> {
    let query = fold_query(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits = Collector::default();

    for artist in dataset.artists() {
        if contains_folded(&artist.name, &query) {
            hits.push(
                MatchCategory::Name,
                artist.name.clone(),
                artist.name.clone(),
                artist,
            );
        }

        for member in artist
            .members
            .iter()
            .filter(|member| contains_folded(member, &query))
        {
            hits.push(
                MatchCategory::Member,
                member.clone(),
                format!("{} (member of {})", member, artist.name),
                artist,
            );
        }

        if contains_folded(&artist.first_album, &query) {
            hits.push(
                MatchCategory::Album,
                artist.first_album.clone(),
                format!("{} - first album: {}", artist.name, artist.first_album),
                artist,
            );
        }
    }

    for (artist, relation) in dataset.tour_pairs() {
        for slug in relation.dates_locations.slugs() {
            if contains_folded(slug, &query) {
                let place = format_location(slug);
                let label = format!("{} - concert in {}", artist.name, place);
                hits.push(MatchCategory::Location, place, label, artist);
            }
        }
    }

    let hits = hits.finish();
    log::debug!("Universal search for {:?}: {} hits", query, hits.len());
    hits
}

/// The first `limit` universal-search hits, for type-ahead suggestions.
pub fn suggestions<'a>(dataset: &'a Dataset, query: &str, limit: usize) -> Vec<SearchHit<'a>> {
    let mut hits = universal_search(dataset, query);
    hits.truncate(limit);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourbook_core::model::Relation;

    fn dataset() -> Dataset {
        Dataset::from_core(
            vec![
                Artist::new(1, "Queen")
                    .with_member("Freddie Mercury")
                    .with_member("Brian May")
                    .with_first_album("14-12-1973"),
                Artist::new(2, "Pink Floyd")
                    .with_member("Roger Waters")
                    .with_member("Nick Mason")
                    .with_first_album("05-08-1967"),
            ],
            vec![
                Relation::new(1)
                    .with_stop("london-uk", ["2020-01-01"])
                    .with_stop("LONDON-UK", ["2020-01-02"])
                    .with_stop("madrid-spain", ["2020-03-01"]),
                Relation::new(2).with_stop("new_york-usa", ["1977-06-01"]),
            ],
        )
    }

    fn summary<'a>(hits: &'a [SearchHit<'_>]) -> Vec<(MatchCategory, &'a str, i64)> {
        hits.iter()
            .map(|h| (h.category, h.value.as_str(), h.artist.id.get()))
            .collect()
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let dataset = dataset();
        assert!(universal_search(&dataset, "").is_empty());
        assert!(universal_search(&dataset, "   ").is_empty());
    }

    #[test]
    fn test_two_matching_members_two_hits() {
        let dataset = Dataset::from_core(
            vec![Artist::new(1, "Abba")
                .with_member("Agnetha")
                .with_member("Anni-Frid")],
            vec![Relation::new(1)],
        );

        let hits = universal_search(&dataset, "a");
        let members: Vec<&str> = hits
            .iter()
            .filter(|h| h.category == MatchCategory::Member)
            .map(|h| h.value.as_str())
            .collect();
        assert_eq!(members, vec!["Agnetha", "Anni-Frid"]);
        assert_eq!(
            hits.iter()
                .filter(|h| h.category == MatchCategory::Name)
                .count(),
            1
        );

        let unique: HashSet<(MatchCategory, &str)> =
            hits.iter().map(|h| (h.category, h.value.as_str())).collect();
        assert_eq!(unique.len(), hits.len());
    }

    #[test]
    fn test_categories_in_presentation_order() {
        let dataset = dataset();
        // "e" hits a name, two members and one location.
        let hits = universal_search(&dataset, "e");
        let categories: Vec<MatchCategory> = hits.iter().map(|h| h.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert_eq!(hits[0].category, MatchCategory::Name);
        assert_eq!(hits[0].value, "Queen");
    }

    #[test]
    fn test_album_hits() {
        let dataset = dataset();
        let hits = universal_search(&dataset, "1967");
        assert_eq!(summary(&hits), vec![(MatchCategory::Album, "05-08-1967", 2)]);
        assert_eq!(hits[0].label, "Pink Floyd - first album: 05-08-1967");
    }

    #[test]
    fn test_location_hits_dedup_by_formatted_place() {
        let dataset = dataset();
        let hits = universal_search(&dataset, "london");
        assert_eq!(summary(&hits), vec![(MatchCategory::Location, "London, Uk", 1)]);
        assert_eq!(hits[0].label, "Queen - concert in London, Uk");
    }

    #[test]
    fn test_member_label() {
        let dataset = dataset();
        let hits = universal_search(&dataset, "mercury");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "Freddie Mercury (member of Queen)");
    }

    #[test]
    fn test_same_value_for_different_artists_is_kept() {
        let dataset = Dataset::from_core(
            vec![
                Artist::new(1, "Alpha").with_member("Sam"),
                Artist::new(2, "Beta").with_member("Sam"),
            ],
            vec![Relation::new(1), Relation::new(2)],
        );
        let hits = universal_search(&dataset, "sam");
        assert_eq!(
            summary(&hits),
            vec![(MatchCategory::Member, "Sam", 1), (MatchCategory::Member, "Sam", 2)]
        );
    }

    #[test]
    fn test_suggestions_truncate() {
        let dataset = dataset();
        let all = universal_search(&dataset, "e");
        assert!(all.len() > 2);
        assert_eq!(suggestions(&dataset, "e", 2), all[..2].to_vec());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchCategory::Location).unwrap(),
            "\"location\""
        );
        assert_eq!(MatchCategory::Name.to_string(), "artist");
    }
}
