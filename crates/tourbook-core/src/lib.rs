//! Core domain model for tourbook.
//!
//! This crate defines the tour catalogue data model (artists, location
//! entries, date entries, relations and the derived concerts), the
//! immutable [`Dataset`] with its relation lookups, slug formatting, and
//! the shared recognition history.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod dataset;
pub mod error;
pub mod history;
pub mod index;
pub mod model;
pub mod slug;
pub mod tally;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use index::RelationIndex;
pub use slug::{country_of, format_location};
pub use tally::Tally;
