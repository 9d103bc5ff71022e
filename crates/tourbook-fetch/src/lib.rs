//! Dataset loading for tourbook.
//!
//! Obtains the four tour collections from a [`CatalogueSource`] (the
//! public HTTP API or a directory of JSON files), applies the load policy
//! (artists and relations are mandatory, locations and dates optional),
//! and hands back an immutable [`tourbook_core::Dataset`]. Also owns the
//! layered application [`Config`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod collection;
pub mod config;
pub mod error;
pub mod loader;
pub mod source;

pub use client::ApiClient;
pub use collection::Collection;
pub use config::Config;
pub use error::{FetchError, FetchResult, LoadError};
pub use loader::{load_dataset, source_from_config};
pub use source::{CatalogueSource, DirectorySource};
