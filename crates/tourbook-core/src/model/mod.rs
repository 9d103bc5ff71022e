pub mod artist;
pub mod concert;
pub mod date;
pub mod ids;
pub mod location;
pub mod relation;
pub mod wire;

pub use artist::Artist;
pub use concert::Concert;
pub use date::DateEntry;
pub use ids::{ArtistId, DateId, LocationId, RelationId};
pub use location::LocationEntry;
pub use relation::{Relation, TourStops};
