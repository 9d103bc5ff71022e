//! Wire shapes of the tour API.
//!
//! `artists` is published as a bare JSON array; `locations`, `dates` and
//! `relation` are wrapped in an `{"index": [...]}` envelope.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Result;
use crate::model::Artist;

#[derive(Debug, Deserialize)]
struct Indexed<T> {
    index: Vec<T>,
}

/// Decode the bare artist array.
pub fn decode_artists(bytes: &[u8]) -> Result<Vec<Artist>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode an `{"index": [...]}` envelope.
pub fn decode_indexed<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    let envelope: Indexed<T> = serde_json::from_slice(bytes)?;
    Ok(envelope.index)
}
