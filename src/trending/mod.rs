//! Trending-content aggregation

pub mod aggregator;

pub use aggregator::{Aggregator, MAX_DISCOVERED, MAX_ENRICHED, MAX_JOINED_CHARS};
