use std::fmt;

use serde::Serialize;

/// The four collections published by the tour API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Artists,
    Locations,
    Dates,
    Relations,
}

impl Collection {
    /// Load order: mandatory collections first.
    pub const ALL: [Self; 4] = [Self::Artists, Self::Relations, Self::Locations, Self::Dates];

    /// Path segment under the API base URL.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Artists => "artists",
            Self::Locations => "locations",
            Self::Dates => "dates",
            Self::Relations => "relation",
        }
    }

    /// File name used by [`crate::DirectorySource`].
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Artists => "artists.json",
            Self::Locations => "locations.json",
            Self::Dates => "dates.json",
            Self::Relations => "relation.json",
        }
    }

    /// Whether a failure to obtain this collection aborts the load.
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::Artists | Self::Relations)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artists => "artists",
            Self::Locations => "locations",
            Self::Dates => "dates",
            Self::Relations => "relations",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandatory_collections() {
        assert!(Collection::Artists.is_mandatory());
        assert!(Collection::Relations.is_mandatory());
        assert!(!Collection::Locations.is_mandatory());
        assert!(!Collection::Dates.is_mandatory());
    }

    #[test]
    fn test_relation_endpoint_is_singular() {
        assert_eq!(Collection::Relations.endpoint(), "relation");
        assert_eq!(Collection::Relations.to_string(), "relations");
    }

    #[test]
    fn test_load_order_starts_with_mandatory() {
        assert!(Collection::ALL[..2].iter().all(|c| c.is_mandatory()));
    }
}
