//! Concerts grouped by displayed location, per artist.

use serde::Serialize;

use tourbook_core::format_location;
use tourbook_core::model::{Artist, Concert};
use tourbook_core::Dataset;

use crate::artists::search_artists;

/// All dates played at one displayed location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationGroup {
    /// Formatted location, e.g. `"London, Uk"`.
    pub location: String,
    pub dates: Vec<String>,
}

/// One artist and its grouped tour stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistTour<'a> {
    pub artist: &'a Artist,
    pub stops: Vec<LocationGroup>,
}

/// Group concerts by formatted location.
///
/// Groups appear in first-seen order and concatenate their dates in
/// concert order; slugs that format to the same string share a group.
pub fn group_by_location(concerts: &[Concert]) -> Vec<LocationGroup> {
    let mut groups: Vec<LocationGroup> = Vec::new();
    for concert in concerts {
        let location = format_location(&concert.location);
        match groups.iter_mut().find(|group| group.location == location) {
            Some(group) => group.dates.extend(concert.dates.iter().cloned()),
            None => groups.push(LocationGroup {
                location,
                dates: concert.dates.clone(),
            }),
        }
    }
    groups
}

/// Tours of every artist whose name or members match `name_query`.
///
/// With `location_filter`, only stops at that location are kept; the
/// filter may be given raw (`"london-uk"`) or formatted (`"London, Uk"`).
/// Artists left without stops are omitted. Concerts come from the
/// positional join.
pub fn tour_map<'a>(
    dataset: &'a Dataset,
    name_query: &str,
    location_filter: Option<&str>,
) -> Vec<ArtistTour<'a>> {
    let wanted = location_filter
        .map(str::trim)
        .filter(|filter| !filter.is_empty())
        .map(format_location);

    search_artists(dataset.artists(), name_query)
        .into_iter()
        .filter_map(|artist| {
            let concerts: Vec<Concert> = dataset
                .concerts_for_artist(artist.id)
                .into_iter()
                .filter(|concert| {
                    wanted
                        .as_deref()
                        .map_or(true, |place| format_location(&concert.location) == place)
                })
                .collect();
            if concerts.is_empty() {
                None
            } else {
                Some(ArtistTour {
                    artist,
                    stops: group_by_location(&concerts),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourbook_core::model::{ArtistId, Relation};

    fn dataset() -> Dataset {
        Dataset::from_core(
            vec![
                Artist::new(1, "Queen").with_member("Freddie"),
                Artist::new(2, "Pink Floyd").with_member("Roger"),
                Artist::new(3, "Scorpions").with_member("Klaus"),
            ],
            vec![
                Relation::new(1)
                    .with_stop("london-uk", ["2020-01-01"])
                    .with_stop("paris-france", ["2020-02-01", "2020-02-02"]),
                Relation::new(2).with_stop("London-UK", ["1977-03-01"]),
                Relation::new(3),
            ],
        )
    }

    #[test]
    fn test_group_round_trips_relation() {
        let dataset = dataset();
        let concerts = dataset.concerts_for_artist(ArtistId::new(1));
        let groups = group_by_location(&concerts);

        let relation = dataset.relation_by_position(0).unwrap();
        let expected: Vec<LocationGroup> = relation
            .dates_locations
            .iter()
            .map(|(slug, dates)| LocationGroup {
                location: format_location(slug),
                dates: dates.to_vec(),
            })
            .collect();
        assert_eq!(groups, expected);
    }

    #[test]
    fn test_group_merges_differently_cased_slugs() {
        let concerts = vec![
            Concert {
                artist_id: ArtistId::new(1),
                artist_name: "Queen".into(),
                location: "london-uk".into(),
                dates: vec!["a".into()],
            },
            Concert {
                artist_id: ArtistId::new(1),
                artist_name: "Queen".into(),
                location: "LONDON-UK".into(),
                dates: vec!["b".into()],
            },
        ];
        let groups = group_by_location(&concerts);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].location, "London, Uk");
        assert_eq!(groups[0].dates, vec!["a", "b"]);
    }

    #[test]
    fn test_tour_map_all_artists() {
        let dataset = dataset();
        let tours = tour_map(&dataset, "", None);
        let names: Vec<&str> = tours.iter().map(|t| t.artist.name.as_str()).collect();
        assert_eq!(names, vec!["Queen", "Pink Floyd"]);
        assert_eq!(tours[0].stops.len(), 2);
    }

    #[test]
    fn test_tour_map_location_filter_accepts_raw_or_formatted() {
        let dataset = dataset();
        let formatted = tour_map(&dataset, "", Some("London, Uk"));
        let raw = tour_map(&dataset, "", Some("london-uk"));
        assert_eq!(formatted, raw);
        assert_eq!(formatted.len(), 2);
        assert!(formatted
            .iter()
            .all(|t| t.stops.len() == 1 && t.stops[0].location == "London, Uk"));
    }

    #[test]
    fn test_tour_map_name_query() {
        let dataset = dataset();
        let tours = tour_map(&dataset, "roger", None);
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].artist.name, "Pink Floyd");
    }

    #[test]
    fn test_tour_map_no_results() {
        let dataset = dataset();
        assert!(tour_map(&dataset, "", Some("Tokyo, Japan")).is_empty());
    }
}
