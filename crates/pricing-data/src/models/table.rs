//! Transformed pricing shapes served to consumers.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::FenceCategory;

/// Per-category pricing: price-per-metre points keyed by fence height,
/// plus descriptive text for the calculator UI.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPricing {
    /// Price per metre keyed by stringified height, e.g. `"1.8" -> 195`.
    pub prices: BTreeMap<String, Decimal>,
    /// Human-readable description of the fence style.
    pub description: String,
    /// Materials included in the quoted price.
    pub materials: Vec<String>,
}

/// The complete transformed pricing dataset, one entry per category.
///
/// All four categories are always present; a category with no live rows
/// still carries its fallback description and materials.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingTable {
    pub timber: CategoryPricing,
    pub aluminum: CategoryPricing,
    pub pvc: CategoryPricing,
    pub rural: CategoryPricing,
}

impl PricingTable {
    /// Borrow the entry for a category.
    pub fn category(&self, category: FenceCategory) -> &CategoryPricing {
        match category {
            FenceCategory::Timber => &self.timber,
            FenceCategory::Aluminum => &self.aluminum,
            FenceCategory::Pvc => &self.pvc,
            FenceCategory::Rural => &self.rural,
        }
    }

    /// Mutably borrow the entry for a category.
    pub fn category_mut(&mut self, category: FenceCategory) -> &mut CategoryPricing {
        match category {
            FenceCategory::Timber => &mut self.timber,
            FenceCategory::Aluminum => &mut self.aluminum,
            FenceCategory::Pvc => &mut self.pvc,
            FenceCategory::Rural => &mut self.rural,
        }
    }
}
