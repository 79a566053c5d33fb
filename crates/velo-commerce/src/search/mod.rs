//! Search module.
//!
//! Contains the listing filter, sort options and the catalog query.

mod filter;
mod query;

pub use filter::{QueryFilter, DEFAULT_MAX_PRICE_CENTS};
pub use query::{query, SortOption};
