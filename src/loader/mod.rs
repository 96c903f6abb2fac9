//! Loader
//!
//! Builds the immutable base table from a delimited source. Loading is
//! all-or-nothing: any row violating the type constraints aborts the load
//! with row context.

mod csv;
mod errors;

pub use self::csv::{load_csv, load_csv_path};
pub use errors::{LoadError, LoadResult};
