//! The immutable, in-memory tour catalogue.

use crate::error::{Error, Result};
use crate::index::{PositionIndex, RelationIndex};
use crate::model::{
    Artist, ArtistId, Concert, DateEntry, DateId, LocationEntry, LocationId, Relation,
};

/// The four source collections, loaded once and read many times.
///
/// A `Dataset` has no mutating operations. Queries borrow it; share it
/// across threads with `Arc<Dataset>`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    artists: Vec<Artist>,
    locations: Vec<LocationEntry>,
    dates: Vec<DateEntry>,
    relations: Vec<Relation>,
    index: RelationIndex,
    location_index: PositionIndex<LocationId>,
    date_index: PositionIndex<DateId>,
}

impl Dataset {
    #[must_use]
    pub fn new(
        artists: Vec<Artist>,
        locations: Vec<LocationEntry>,
        dates: Vec<DateEntry>,
        relations: Vec<Relation>,
    ) -> Self {
        let index = RelationIndex::build(&artists, &relations);
        let location_index = PositionIndex::build(&locations, |entry: &LocationEntry| entry.id);
        let date_index = PositionIndex::build(&dates, |entry: &DateEntry| entry.id);
        Self {
            artists,
            locations,
            dates,
            relations,
            index,
            location_index,
            date_index,
        }
    }

    /// Build a dataset from the two mandatory collections only.
    #[must_use]
    pub fn from_core(artists: Vec<Artist>, relations: Vec<Relation>) -> Self {
        Self::new(artists, Vec::new(), Vec::new(), relations)
    }

    #[must_use]
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    #[must_use]
    pub fn locations(&self) -> &[LocationEntry] {
        &self.locations
    }

    #[must_use]
    pub fn dates(&self) -> &[DateEntry] {
        &self.dates
    }

    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    #[must_use]
    pub fn artist_by_id(&self, id: ArtistId) -> Option<&Artist> {
        self.index
            .artist_position(id)
            .and_then(|pos| self.artists.get(pos))
    }

    /// Like [`Dataset::artist_by_id`], but a miss is an error.
    pub fn require_artist(&self, id: ArtistId) -> Result<&Artist> {
        self.artist_by_id(id).ok_or_else(|| Error::NotFound {
            entity: "artist",
            id: id.to_string(),
        })
    }

    /// Position of the artist in the artist collection.
    #[must_use]
    pub fn artist_position(&self, id: ArtistId) -> Option<usize> {
        self.index.artist_position(id)
    }

    #[must_use]
    pub fn location_entry(&self, id: LocationId) -> Option<&LocationEntry> {
        self.location_index
            .position(id)
            .and_then(|pos| self.locations.get(pos))
    }

    #[must_use]
    pub fn date_entry(&self, id: DateId) -> Option<&DateEntry> {
        self.date_index
            .position(id)
            .and_then(|pos| self.dates.get(pos))
    }

    /// The relation whose identifier equals the artist identifier.
    ///
    /// This is the safer join and the one new call sites should use.
    #[must_use]
    pub fn relation_by_artist_id(&self, id: ArtistId) -> Option<&Relation> {
        self.index
            .relation_position_for(id)
            .and_then(|pos| self.relations.get(pos))
    }

    /// The relation at the same ordinal position as the artist at
    /// `artist_index`.
    ///
    /// Assumes artists and relations were received in the same order from
    /// the same source. Returns `None` when the relation collection is
    /// shorter.
    #[must_use]
    pub fn relation_by_position(&self, artist_index: usize) -> Option<&Relation> {
        self.relations.get(artist_index)
    }

    /// Positionally joined `(artist, relation)` pairs, stopping at the end
    /// of the shorter collection.
    pub fn tour_pairs(&self) -> impl Iterator<Item = (&Artist, &Relation)> {
        self.artists.iter().zip(self.relations.iter())
    }

    /// One concert per tour stop of the artist, in mapping order, using
    /// the positional join.
    ///
    /// An unknown artist, a missing relation, or an empty relation all
    /// produce an empty list.
    #[must_use]
    pub fn concerts_for_artist(&self, id: ArtistId) -> Vec<Concert> {
        let Some(pos) = self.index.artist_position(id) else {
            return Vec::new();
        };
        match (self.artists.get(pos), self.relation_by_position(pos)) {
            (Some(artist), Some(relation)) => flatten(artist, relation),
            _ => Vec::new(),
        }
    }

    /// Same as [`Dataset::concerts_for_artist`] but over the by-identifier
    /// join.
    #[must_use]
    pub fn concerts_for_artist_by_id(&self, id: ArtistId) -> Vec<Concert> {
        match (self.artist_by_id(id), self.relation_by_artist_id(id)) {
            (Some(artist), Some(relation)) => flatten(artist, relation),
            _ => Vec::new(),
        }
    }
}

/// Flatten a relation into one concert per location.
#[must_use]
pub fn flatten(artist: &Artist, relation: &Relation) -> Vec<Concert> {
    relation
        .dates_locations
        .iter()
        .map(|(slug, dates)| Concert {
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            location: slug.to_owned(),
            dates: dates.to_vec(),
        })
        .collect()
}
