//! Load policy: mandatory collections abort, optional ones degrade.

use tourbook_core::model::wire::{decode_artists, decode_indexed};
use tourbook_core::model::{Artist, DateEntry, LocationEntry, Relation};
use tourbook_core::Dataset;

use crate::client::ApiClient;
use crate::collection::Collection;
use crate::config::Config;
use crate::error::{FetchError, FetchResult, LoadError};
use crate::source::{CatalogueSource, DirectorySource};

/// Pick the source described by `config`: the data directory when one is
/// set, the HTTP API otherwise.
///
/// # Errors
/// Returns an error if the HTTP client cannot be created.
pub fn source_from_config(config: &Config) -> FetchResult<Box<dyn CatalogueSource>> {
    match &config.data_dir {
        Some(dir) => Ok(Box::new(DirectorySource::new(dir.clone()))),
        None => Ok(Box::new(ApiClient::from_config(config)?)),
    }
}

/// Load all four collections from `source` into a [`Dataset`].
///
/// Collections are fetched in [`Collection::ALL`] order, mandatory ones
/// first. A mandatory collection that cannot be obtained fails the load;
/// an optional one is logged and replaced with an empty collection.
///
/// # Errors
/// Returns [`LoadError::Mandatory`] when artists or relations are
/// unavailable.
pub async fn load_dataset(source: &dyn CatalogueSource) -> Result<Dataset, LoadError> {
    log::info!("Loading tour catalogue from {}", source.describe());

    let mut artists: Vec<Artist> = Vec::new();
    let mut relations: Vec<Relation> = Vec::new();
    let mut locations: Vec<LocationEntry> = Vec::new();
    let mut dates: Vec<DateEntry> = Vec::new();

    for collection in Collection::ALL {
        match collection {
            Collection::Artists => {
                artists = settle(collection, fetch(source, collection, decode_artists).await)?;
            }
            Collection::Relations => {
                relations = settle(
                    collection,
                    fetch(source, collection, decode_indexed::<Relation>).await,
                )?;
            }
            Collection::Locations => {
                locations = settle(
                    collection,
                    fetch(source, collection, decode_indexed::<LocationEntry>).await,
                )?;
            }
            Collection::Dates => {
                dates = settle(
                    collection,
                    fetch(source, collection, decode_indexed::<DateEntry>).await,
                )?;
            }
        }
    }

    Ok(Dataset::new(artists, locations, dates, relations))
}

async fn fetch<T, F>(
    source: &dyn CatalogueSource,
    collection: Collection,
    decode: F,
) -> FetchResult<Vec<T>>
where
    F: FnOnce(&[u8]) -> tourbook_core::Result<Vec<T>>,
{
    let bytes = source.fetch_raw(collection).await?;
    let items = decode(&bytes).map_err(|e| FetchError::Parse {
        collection,
        message: e.to_string(),
    })?;
    log::info!("Loaded {} {}", items.len(), collection);
    Ok(items)
}

/// Apply the load policy of `collection` to a fetch outcome.
fn settle<T>(collection: Collection, result: FetchResult<Vec<T>>) -> Result<Vec<T>, LoadError> {
    match result {
        Ok(items) => Ok(items),
        Err(source) if collection.is_mandatory() => {
            log::error!("Failed to load {}: {}", collection, source);
            Err(LoadError::Mandatory { collection, source })
        }
        Err(e) => {
            let reason = if e.is_transport() { "unavailable" } else { "malformed" };
            log::warn!("{} {}, continuing without them: {}", collection, reason, e);
            Ok(Vec::new())
        }
    }
}
