//! Integration tests for loading a catalogue and querying it.
//!
//! These tests use on-disk fixtures and in-memory sources so the load
//! policy can be verified without calling the real API.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tempfile::TempDir;
use tourbook_core::model::ArtistId;
use tourbook_fetch::{load_dataset, CatalogueSource, Collection, DirectorySource, FetchError, FetchResult, LoadError};
use tourbook_search::{MatchCategory, QueryEngine};

const ARTISTS: &str = r#"[
  {"id": 1, "image": "https://example.test/queen.jpeg", "name": "Queen",
   "members": ["Freddie Mercury", "Brian May", "John Daecon", "Roger Meddows-Taylor"],
   "creationDate": 1970, "firstAlbum": "14-12-1973",
   "locations": "https://example.test/api/locations/1",
   "concertDates": "https://example.test/api/dates/1",
   "relations": "https://example.test/api/relation/1"},
  {"id": 2, "image": "https://example.test/soja.jpeg", "name": "SOJA",
   "members": ["Jacob Hemphill", "Bob Jefferson", "Ryan \"Byrd\" Berty"],
   "creationDate": 1997, "firstAlbum": "05-06-2002",
   "locations": "https://example.test/api/locations/2",
   "concertDates": "https://example.test/api/dates/2",
   "relations": "https://example.test/api/relation/2"}
]"#;

const RELATIONS: &str = r#"{"index": [
  {"id": 1, "datesLocations": {
    "north_carolina-usa": ["23-08-2019"],
    "georgia-usa": ["22-08-2019"],
    "los_angeles-usa": ["20-08-2019"],
    "saitama-japan": ["26-01-2020"],
    "osaka-japan": ["28-01-2020"],
    "nagoya-japan": ["30-01-2019"],
    "penrose-new_zealand": ["07-02-2020"],
    "dunedin-new_zealand": ["10-02-2020"]}},
  {"id": 2, "datesLocations": {
    "playa_del_carmen-mexico": ["05-12-2019", "06-12-2019"],
    "london-uk": ["28-11-2019"]}}
]}"#;

const LOCATIONS: &str = r#"{"index": [
  {"id": 1, "locations": ["north_carolina-usa", "georgia-usa"], "dates": "https://example.test/api/dates/1"},
  {"id": 2, "locations": ["playa_del_carmen-mexico", "london-uk"], "dates": "https://example.test/api/dates/2"}
]}"#;

const DATES: &str = r#"{"index": [
  {"id": 1, "dates": ["*23-08-2019", "*22-08-2019"]},
  {"id": 2, "dates": ["*05-12-2019", "06-12-2019", "*28-11-2019"]}
]}"#;

fn write_fixture(dir: &Path, include_optional: bool) {
    std::fs::write(dir.join("artists.json"), ARTISTS).unwrap();
    std::fs::write(dir.join("relation.json"), RELATIONS).unwrap();
    if include_optional {
        std::fs::write(dir.join("locations.json"), LOCATIONS).unwrap();
        std::fs::write(dir.join("dates.json"), DATES).unwrap();
    }
}

/// A source serving canned payloads or canned failures per collection.
struct StubSource {
    payloads: HashMap<Collection, Result<&'static str, u16>>,
}

impl StubSource {
    fn new() -> Self {
        let mut payloads = HashMap::new();
        payloads.insert(Collection::Artists, Ok(ARTISTS));
        payloads.insert(Collection::Relations, Ok(RELATIONS));
        payloads.insert(Collection::Locations, Ok(LOCATIONS));
        payloads.insert(Collection::Dates, Ok(DATES));
        Self { payloads }
    }

    fn failing(mut self, collection: Collection, status: u16) -> Self {
        self.payloads.insert(collection, Err(status));
        self
    }

    fn serving(mut self, collection: Collection, payload: &'static str) -> Self {
        self.payloads.insert(collection, Ok(payload));
        self
    }
}

#[async_trait]
impl CatalogueSource for StubSource {
    fn describe(&self) -> String {
        "stub".to_string()
    }

    async fn fetch_raw(&self, collection: Collection) -> FetchResult<Vec<u8>> {
        match self.payloads.get(&collection) {
            Some(Ok(payload)) => Ok(payload.as_bytes().to_vec()),
            Some(Err(status)) => Err(FetchError::Status {
                collection,
                status: *status,
            }),
            None => Err(FetchError::Http {
                collection,
                message: "connection refused".to_string(),
            }),
        }
    }
}

#[tokio::test]
async fn test_load_from_directory() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path(), true);

    let dataset = load_dataset(&DirectorySource::new(temp_dir.path()))
        .await
        .expect("fixture should load");

    assert_eq!(dataset.artists().len(), 2);
    assert_eq!(dataset.relations().len(), 2);
    assert_eq!(dataset.locations().len(), 2);
    assert_eq!(dataset.dates().len(), 2);
}

#[tokio::test]
async fn test_missing_optional_files_degrade() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path(), false);

    let dataset = load_dataset(&DirectorySource::new(temp_dir.path()))
        .await
        .expect("optional collections must not abort the load");

    assert_eq!(dataset.artists().len(), 2);
    assert!(dataset.locations().is_empty());
    assert!(dataset.dates().is_empty());
}

#[tokio::test]
async fn test_missing_artists_file_aborts() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("relation.json"), RELATIONS).unwrap();

    let err = load_dataset(&DirectorySource::new(temp_dir.path()))
        .await
        .unwrap_err();

    let LoadError::Mandatory { collection, source } = err;
    assert_eq!(collection, Collection::Artists);
    assert!(matches!(source, FetchError::Io { .. }));
}

#[tokio::test]
async fn test_relation_failure_aborts() {
    let source = StubSource::new().failing(Collection::Relations, 500);
    let err = load_dataset(&source).await.unwrap_err();
    assert!(err.user_message().contains("relations"));
}

#[tokio::test]
async fn test_undecodable_relations_abort() {
    let source = StubSource::new().serving(Collection::Relations, "[1, 2, 3]");
    let err = load_dataset(&source).await.unwrap_err();
    let LoadError::Mandatory { source, .. } = err;
    assert!(matches!(source, FetchError::Parse { .. }));
}

#[tokio::test]
async fn test_optional_failures_degrade() {
    let source = StubSource::new()
        .failing(Collection::Locations, 503)
        .serving(Collection::Dates, "not json");

    let dataset = load_dataset(&source).await.unwrap();
    assert!(dataset.locations().is_empty());
    assert!(dataset.dates().is_empty());
    assert_eq!(dataset.relations().len(), 2);
}

#[tokio::test]
async fn test_loaded_catalogue_answers_queries() {
    let dataset = load_dataset(&StubSource::new()).await.unwrap();
    let engine = QueryEngine::new(&dataset);

    let concerts = engine.concerts_for_artist(ArtistId::new(1));
    assert_eq!(concerts.len(), 8);
    assert_eq!(concerts[0].location, "north_carolina-usa");

    let japan: Vec<String> = engine
        .search_by_location("japan")
        .into_iter()
        .map(|c| c.location)
        .collect();
    assert_eq!(japan, vec!["saitama-japan", "osaka-japan", "nagoya-japan"]);

    let hits = engine.universal_search("london");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].category, MatchCategory::Location);
    assert_eq!(hits[0].artist.name, "SOJA");

    let stats = engine.concert_stats(3);
    assert_eq!(stats.concert_count, 11);
    assert_eq!(stats.top_countries[0], ("usa".to_string(), 3));
    assert_eq!(stats.top_countries[1], ("japan".to_string(), 3));
}
