//! Domain types and pure map/filter logic shared across the sgbirds crates.
//!
//! This crate performs no I/O. The HTTP layer, database layer, and eBird
//! client all build on the types defined here.

pub mod error;
pub mod filter;
pub mod geo;
pub mod markers;
pub mod types;
