//! Typed client for the eBird v2 API.
//!
//! Covers the three endpoint families this product consumes: the regional
//! species-code list, recent observations by region, and the hotspot
//! reference feed (which, unlike the rest of the API, returns headerless
//! CSV with a fixed column schema).
//!
//! The client issues single unguarded requests: no retries, no pagination.
//! A missing API key fails the individual call, not client construction,
//! so a deployment without a key can still serve database-backed routes.

pub mod client;
pub mod csv_feed;
pub mod records;

pub use client::{EbirdClient, EbirdError};
pub use records::{HotspotCsvRecord, HotspotInfo, RecentObservation};
