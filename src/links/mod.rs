//! Link resolution collaborator
//!
//! Maps movie titles to external identifiers after load. The driver is
//! total: a title that keeps failing gets the sentinel value, never an
//! error, so batch enrichment always completes.

mod enrich;
mod resolver;

pub use enrich::{enrich_links, EnrichConfig};
pub use resolver::{LinkResolver, ResolveError, ResolvedLink, LINK_NOT_FOUND};
