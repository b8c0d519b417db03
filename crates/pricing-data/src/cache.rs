//! TTL-gated pricing cache with static fallback.
//!
//! [`PricingCache`] wraps a [`PricingSource`] with a fixed freshness window,
//! serving cached results until expiry and falling back to the compiled-in
//! dataset when the live fetch fails entirely. [`PricingCache::get_pricing`]
//! never rejects - the pricing display degrades gracefully instead of
//! breaking the page.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::fallback::FALLBACK_PRICING;
use crate::models::{PricingResult, PricingRow, PricingTable, Provenance};
use crate::source::PricingSource;
use crate::transform::transform_rows;

/// Freshness window for a cached entry.
pub const PRICING_CACHE_TTL: Duration = Duration::from_secs(300);

/// The single cached pricing payload.
///
/// Overwritten wholesale on each successful refresh; a failed fetch never
/// touches it.
struct CacheEntry {
    rows: Vec<PricingRow>,
    table: PricingTable,
    fetched_at: Instant,
}

/// Single-slot TTL cache over a pricing source.
///
/// There is exactly one pricing dataset in this domain, so a single optional
/// entry suffices; a future variant needing multiple keys would promote this
/// to a map of entries with the same freshness and fallback rules per key.
pub struct PricingCache {
    source: Arc<dyn PricingSource>,
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

impl PricingCache {
    /// Create a cache over `source` with the standard 5-minute TTL.
    pub fn new(source: Arc<dyn PricingSource>) -> Self {
        Self::with_ttl(source, PRICING_CACHE_TTL)
    }

    /// Create a cache with a custom TTL.
    pub fn with_ttl(source: Arc<dyn PricingSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// Serve pricing data, preferring (in order) an unexpired cache entry,
    /// a live fetch, and finally the static fallback dataset.
    ///
    /// Requests inside the freshness window never touch the source; this is
    /// the property that shields the unreliable dependency from repeated
    /// page loads.
    pub async fn get_pricing(&self) -> PricingResult {
        {
            let guard = self.entry.read().await;
            if let Some(entry) = guard.as_ref() {
                if entry.fetched_at.elapsed() < self.ttl {
                    debug!("pricing cache hit (age {:?})", entry.fetched_at.elapsed());
                    return PricingResult {
                        rows: entry.rows.clone(),
                        pricing: entry.table.clone(),
                        provenance: Provenance::Cached,
                    };
                }
            }
        }

        // Concurrent callers that all observe an expired entry each trigger
        // their own fetch; misses are not coalesced into a shared in-flight
        // future. TODO: coalesce concurrent misses behind a shared future to
        // remove the thundering-herd window.
        match self.source.fetch_pricing().await {
            Ok(rows) => {
                let table = transform_rows(&rows, &FALLBACK_PRICING);
                let mut guard = self.entry.write().await;
                *guard = Some(CacheEntry {
                    rows: rows.clone(),
                    table: table.clone(),
                    fetched_at: Instant::now(),
                });
                debug!("pricing cache refreshed ({} rows)", rows.len());
                PricingResult {
                    rows,
                    pricing: table,
                    provenance: Provenance::Live,
                }
            }
            Err(error) => {
                // Policy: serve known-safe static defaults rather than an
                // arbitrarily stale real entry. The stale entry is left in
                // place untouched for the next refresh to overwrite.
                warn!("pricing fetch failed, serving fallback dataset: {}", error);
                PricingResult {
                    rows: Vec::new(),
                    pricing: FALLBACK_PRICING.clone(),
                    provenance: Provenance::Fallback,
                }
            }
        }
    }
}
