//! Lookups joining artists to their relations.
//!
//! The source publishes artists and relations as two independent
//! collections. Two joins are kept side by side because they are not
//! guaranteed to agree:
//!
//! - **by position**: the Nth artist owns the Nth relation. Only valid
//!   when both collections come from the same source in the same order.
//!   Composite and aggregate queries use this join.
//! - **by identifier**: the relation whose id equals the artist id.
//!   Preferred for direct, id-based access.

use std::collections::HashMap;
use std::hash::Hash;

use crate::model::{Artist, ArtistId, Relation, RelationId};

/// Position of each identifier in one collection. The first occurrence
/// of a repeated identifier wins.
#[derive(Debug, Clone)]
pub struct PositionIndex<K> {
    positions: HashMap<K, usize>,
}

impl<K> Default for PositionIndex<K> {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq + Copy> PositionIndex<K> {
    pub fn build<T>(items: &[T], key: impl Fn(&T) -> K) -> Self {
        let mut positions = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            positions.entry(key(item)).or_insert(pos);
        }
        Self { positions }
    }

    #[must_use]
    pub fn position(&self, key: K) -> Option<usize> {
        self.positions.get(&key).copied()
    }
}

/// Positions of artists and relations, keyed by identifier.
///
/// When an identifier occurs more than once the first occurrence wins,
/// matching a front-to-back scan.
#[derive(Debug, Clone, Default)]
pub struct RelationIndex {
    artist_positions: PositionIndex<ArtistId>,
    relation_positions: PositionIndex<RelationId>,
}

impl RelationIndex {
    #[must_use]
    pub fn build(artists: &[Artist], relations: &[Relation]) -> Self {
        let artist_positions = PositionIndex::build(artists, |artist: &Artist| artist.id);
        let relation_positions = PositionIndex::build(relations, |relation: &Relation| relation.id);

        if artists.len() != relations.len() {
            log::warn!(
                "Artist and relation collections differ in length ({} vs {}); positional joins will miss entries",
                artists.len(),
                relations.len()
            );
        }

        Self {
            artist_positions,
            relation_positions,
        }
    }

    /// Position of the artist with `id` in the artist collection.
    #[must_use]
    pub fn artist_position(&self, id: ArtistId) -> Option<usize> {
        self.artist_positions.position(id)
    }

    /// Position of the relation whose identifier equals `artist`.
    #[must_use]
    pub fn relation_position_for(&self, artist: ArtistId) -> Option<usize> {
        self.relation_positions
            .position(RelationId::new(artist.get()))
    }
}
