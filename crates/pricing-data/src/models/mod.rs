//! Data shapes for raw pricing rows, transformed tables, and results.

mod category;
mod table;

pub use category::FenceCategory;
pub use table::{CategoryPricing, PricingTable};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One raw pricing row as returned by the `get-pricing` edge function
/// (a row of the `fence_pricing` table).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingRow {
    /// Free-form category label, normalized via [`FenceCategory::from_label`].
    pub category: String,
    /// Fence height in metres.
    pub height: Decimal,
    /// Price per metre at this height.
    pub price_per_metre: Decimal,
    /// Optional description override for the category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional materials override for the category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<String>>,
}

/// How a pricing result was obtained.
///
/// Attached for operational visibility (e.g. an admin dashboard showing
/// "using fallback pricing"); it never changes the data shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Freshly fetched from the live source on this request.
    Live,
    /// Served from an unexpired cache entry; no fetch was performed.
    Cached,
    /// The live fetch failed entirely; the static fallback dataset was used.
    Fallback,
}

impl Provenance {
    pub fn is_cached(&self) -> bool {
        matches!(self, Provenance::Cached)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Provenance::Fallback)
    }
}

/// The result of a pricing lookup: raw rows, the transformed table, and
/// the provenance tag.
#[derive(Clone, Debug, Serialize)]
pub struct PricingResult {
    /// Raw rows the table was derived from; empty on the fallback path.
    pub rows: Vec<PricingRow>,
    /// Transformed category -> price-point table.
    pub pricing: PricingTable,
    /// How this result was obtained.
    pub provenance: Provenance,
}
