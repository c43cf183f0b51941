//! Cache Module
//!
//! Provides generic in-memory caching with lazy TTL expiration.

mod entry;
mod lookup;
mod store;


// Re-export public types
pub use entry::Entry;
pub use lookup::Lookup;
pub use store::TtlCache;
