//! Query engine for tourbook.
//!
//! Text search, numeric filters, universal search with per-category
//! de-duplication, tour grouping and aggregate statistics, all evaluated
//! against an immutable [`tourbook_core::Dataset`].
//!
//! Every query is a pure function of its inputs: the same dataset and
//! parameters always give the same, deterministically ordered result, and
//! a miss is an empty result rather than an error.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod artists;
pub mod concerts;
pub mod engine;
pub mod stats;
pub mod tour;
pub mod universal;

mod text;

pub use engine::QueryEngine;
pub use stats::{concert_stats, top_entities, ConcertStats};
pub use tour::{group_by_location, ArtistTour, LocationGroup};
pub use universal::{MatchCategory, SearchHit};
