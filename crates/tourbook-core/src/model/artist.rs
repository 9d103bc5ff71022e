use serde::{Deserialize, Serialize};

use crate::model::ids::ArtistId;

/// A touring artist (solo act or band).
///
/// Mirrors one element of the source's `artists` collection. The source
/// also publishes URLs to the per-artist locations, dates and relation
/// resources; those are ignored because the dataset holds the whole
/// collections instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,

    /// Opaque image URI, carried for presentation only.
    #[serde(default)]
    pub image: String,

    /// Member names in display order.
    #[serde(default)]
    pub members: Vec<String>,

    /// Year the act was formed. Not validated; 0 usually means unknown.
    pub creation_date: i32,

    /// Label of the first album, usually a `dd-mm-yyyy` date but free text.
    pub first_album: String,
}

impl Artist {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ArtistId::new(id),
            name: name.into(),
            image: String::new(),
            members: Vec::new(),
            creation_date: 0,
            first_album: String::new(),
        }
    }

    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    #[must_use]
    pub fn with_creation_date(mut self, year: i32) -> Self {
        self.creation_date = year;
        self
    }

    #[must_use]
    pub fn with_first_album(mut self, label: impl Into<String>) -> Self {
        self.first_album = label.into();
        self
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
