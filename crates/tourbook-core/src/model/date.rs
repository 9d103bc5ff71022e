use serde::{Deserialize, Serialize};

use crate::model::ids::DateId;

/// One element of the source's `dates` collection.
///
/// Dates stay opaque strings; the public API marks some of them with a
/// leading `*` and that marker is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEntry {
    pub id: DateId,
    #[serde(default)]
    pub dates: Vec<String>,
}

impl DateEntry {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id: DateId::new(id),
            dates: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.dates.push(date.into());
        self
    }
}
