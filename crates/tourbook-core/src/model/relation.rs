use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::ids::RelationId;

/// Ordered mapping from a raw location slug to the dates played there.
///
/// Keeps the order in which slugs appear in the source document so every
/// view derived from it (concerts, groupings, search hits) is stable from
/// one load to the next. Serialises as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourStops(Vec<(String, Vec<String>)>);

impl TourStops {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set the dates for `slug`. A repeated slug keeps its first position
    /// but takes the latest dates, as a JSON object decoded into a map would.
    pub fn insert(&mut self, slug: impl Into<String>, dates: Vec<String>) {
        let slug = slug.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == slug) {
            Some((_, existing)) => *existing = dates,
            None => self.0.push((slug, dates)),
        }
    }

    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(existing, _)| existing == slug)
            .map(|(_, dates)| dates.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(slug, dates)| (slug.as_str(), dates.as_slice()))
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(slug, _)| slug.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of dates across all locations.
    #[must_use]
    pub fn date_count(&self) -> usize {
        self.0.iter().map(|(_, dates)| dates.len()).sum()
    }
}

impl<S, D> FromIterator<(S, D)> for TourStops
where
    S: Into<String>,
    D: IntoIterator,
    D::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, D)>>(iter: I) -> Self {
        let mut stops = Self::new();
        for (slug, dates) in iter {
            stops.insert(slug, dates.into_iter().map(Into::into).collect());
        }
        stops
    }
}

impl Serialize for TourStops {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(slug, dates)| (slug, dates)))
    }
}

impl<'de> Deserialize<'de> for TourStops {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StopsVisitor;

        impl<'de> Visitor<'de> for StopsVisitor {
            type Value = TourStops;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of location slugs to date lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TourStops, A::Error> {
                let mut stops = TourStops(Vec::with_capacity(access.size_hint().unwrap_or(0)));
                while let Some((slug, dates)) = access.next_entry::<String, Vec<String>>()? {
                    stops.insert(slug, dates);
                }
                Ok(stops)
            }
        }

        deserializer.deserialize_map(StopsVisitor)
    }
}

/// One element of the source's `relation` collection: where and when a
/// single artist performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub id: RelationId,
    #[serde(default)]
    pub dates_locations: TourStops,
}

impl Relation {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id: RelationId::new(id),
            dates_locations: TourStops::new(),
        }
    }

    #[must_use]
    pub fn with_stop<I, S>(mut self, slug: impl Into<String>, dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dates_locations
            .insert(slug, dates.into_iter().map(Into::into).collect());
        self
    }
}
