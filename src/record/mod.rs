//! Record Store and Genre Expander
//!
//! The base table is built once at load time and never mutated. Derived
//! views (exploded, filtered, grouped) are returned as new values.
//!
//! # Invariants
//!
//! - A row's `RowId` is stable for the session and referenced by every
//!   derived view
//! - A record's genre sequence is ordered and duplicate-free
//! - The exploded view holds exactly one row per (movie, genre) pair

mod errors;
mod explode;
mod genres;
mod movie;

pub use errors::{ParseError, RecordResult};
pub use explode::{collapse, explode, ExplodedRecord, ExplodedTable};
pub use genres::parse_genre_list;
pub use movie::{MovieRecord, MovieTable, NumericField, RecordFields, RowId};
