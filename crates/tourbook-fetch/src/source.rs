//! Where the raw collections come from.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::collection::Collection;
use crate::error::{FetchError, FetchResult};

/// A provider of raw collection payloads.
///
/// Implementations only transport bytes; decoding and the
/// mandatory/optional policy live in [`crate::loader`].
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Short human-readable description, used in log messages.
    fn describe(&self) -> String;

    /// Fetch the raw JSON document for `collection`.
    async fn fetch_raw(&self, collection: Collection) -> FetchResult<Vec<u8>>;
}

/// Reads the collections from JSON files in a directory.
///
/// The files use the same shapes as the API: `artists.json` is a bare
/// array, `locations.json`, `dates.json` and `relation.json` are wrapped
/// in `{"index": [...]}`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl CatalogueSource for DirectorySource {
    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }

    async fn fetch_raw(&self, collection: Collection) -> FetchResult<Vec<u8>> {
        let path = self.dir.join(collection.file_name());
        log::debug!("Reading {} from {}", collection, path.display());
        tokio::fs::read(&path)
            .await
            .map_err(|source| FetchError::Io {
                collection,
                path,
                source,
            })
    }
}
