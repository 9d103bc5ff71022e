use serde::{Deserialize, Serialize};

use crate::model::ids::LocationId;

/// One element of the source's `locations` collection: the raw slugs an
/// artist has toured, plus a link to the matching dates resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub id: LocationId,

    /// Raw slugs such as `"north_carolina-usa"`.
    #[serde(default)]
    pub locations: Vec<String>,

    /// Reference to the dates resource (a URL in the public API).
    #[serde(default)]
    pub dates: String,
}

impl LocationEntry {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id: LocationId::new(id),
            locations: Vec::new(),
            dates: String::new(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, slug: impl Into<String>) -> Self {
        self.locations.push(slug.into());
        self
    }
}
