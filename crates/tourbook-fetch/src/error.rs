//! Error types for dataset loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::collection::Collection;

/// Failure to obtain or decode one collection.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or its body could not be read.
    #[error("HTTP error fetching {collection}: {message}")]
    Http {
        collection: Collection,
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("{collection} endpoint returned HTTP {status}")]
    Status { collection: Collection, status: u16 },

    /// The payload did not match the expected JSON shape.
    #[error("parse error in {collection}: {message}")]
    Parse {
        collection: Collection,
        message: String,
    },

    /// A local collection file could not be read.
    #[error("cannot read {collection} from {path:?}: {source}")]
    Io {
        collection: Collection,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client itself could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl FetchError {
    /// Returns `true` for transport-level failures (as opposed to a bad
    /// payload).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Status { .. } | Self::Io { .. })
    }
}

/// Convenience alias for fetch results.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// A load that could not produce a usable dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A mandatory collection (artists or relations) was unavailable.
    #[error("unable to load {collection}: {source}")]
    Mandatory {
        collection: Collection,
        #[source]
        source: FetchError,
    },
}

impl LoadError {
    /// The single message shown to the user when loading fails.
    pub fn user_message(&self) -> String {
        match self {
            Self::Mandatory { collection, source } => {
                format!("Could not load the tour catalogue ({collection}): {source}")
            }
        }
    }
}
