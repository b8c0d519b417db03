//! FairFence Pricing Data Crate
//!
//! This crate answers one question for the FairFence site: how to obtain
//! pricing data reliably from an unreliable downstream dependency, without
//! hammering it and without ever leaving the pricing calculator blank.
//!
//! # Overview
//!
//! Two cooperating components form the core:
//!
//! - [`EdgeFunctionClient`]: invokes a named Supabase Edge Function over
//!   HTTP with a per-attempt timeout and capped exponential backoff with
//!   jitter for transient failures.
//! - [`PricingCache`]: a single-slot TTL cache over a [`PricingSource`],
//!   serving cached results inside a 5-minute freshness window and falling
//!   back to the compiled-in dataset when the live fetch fails entirely.
//!
//! # Control Flow
//!
//! ```text
//! +------------------+     +------------------+
//! |  /api/pricing    | --> |   PricingCache   |  (freshness check)
//! +------------------+     +------------------+
//!                                  | miss
//!                                  v
//!                          +------------------+
//!                          |  PricingSource   |  (trait seam)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +--------------------+
//!                          | EdgeFunctionClient |  (retry + backoff)
//!                          +--------------------+
//!                                  | total failure
//!                                  v
//!                          +------------------+
//!                          | FALLBACK_PRICING |  (static dataset)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PricingRow`] - One raw row from the `fence_pricing` table
//! - [`PricingTable`] - Transformed category -> price-point dataset
//! - [`PricingResult`] - Table plus rows plus a [`Provenance`] tag
//! - [`PricingDataError`] - Error taxonomy with retry classification

pub mod cache;
pub mod client;
pub mod errors;
pub mod fallback;
pub mod models;
pub mod source;
pub mod transform;

// Re-export the cache types
pub use cache::{PricingCache, PRICING_CACHE_TTL};

// Re-export the client types
pub use client::{CallOptions, EdgeFunctionClient, EdgeFunctionConfig, RetryPolicy};

// Re-export all public types from models
pub use models::{
    CategoryPricing, FenceCategory, PricingResult, PricingRow, PricingTable, Provenance,
};

// Re-export error types
pub use errors::{PricingDataError, RetryClass};

// Re-export the source seam
pub use source::{
    EdgeFunctionPricingSource, PricingSource, GET_PRICING_FUNCTION, PRICING_TABLES,
};

// Re-export the fallback dataset and transformation
pub use fallback::FALLBACK_PRICING;
pub use transform::transform_rows;
