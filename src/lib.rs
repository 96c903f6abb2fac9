//! cinedb - A strict, deterministic in-memory query and aggregation
//! engine for movie datasets

pub mod dispatch;
pub mod engine;
pub mod links;
pub mod loader;
pub mod observability;
pub mod query;
pub mod record;
pub mod stats;
