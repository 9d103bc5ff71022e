use serde::Serialize;

use crate::model::ids::ArtistId;

/// A flattened (artist, location) view of a relation: every date the
/// artist played at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Concert {
    pub artist_id: ArtistId,
    pub artist_name: String,

    /// Raw location slug, not formatted.
    pub location: String,
    pub dates: Vec<String>,
}
