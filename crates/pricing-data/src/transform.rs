//! Raw row -> pricing table transformation.

use crate::models::{FenceCategory, PricingRow, PricingTable};

/// Group raw rows into the category -> price-point shape consumers expect.
///
/// Each row's price is recorded under its category, keyed by the stringified
/// height. The first row carrying a description or materials list for a
/// category wins; categories left without either after all rows are applied
/// have the text merged in from `defaults`.
pub fn transform_rows(rows: &[PricingRow], defaults: &PricingTable) -> PricingTable {
    let mut table = PricingTable::default();

    for row in rows {
        let entry = table.category_mut(FenceCategory::from_label(&row.category));
        entry
            .prices
            .insert(row.height.normalize().to_string(), row.price_per_metre);

        if entry.description.is_empty() {
            if let Some(description) = &row.description {
                entry.description = description.clone();
            }
        }
        if entry.materials.is_empty() {
            if let Some(materials) = &row.materials {
                entry.materials = materials.clone();
            }
        }
    }

    for category in FenceCategory::ALL {
        let entry = table.category_mut(category);
        let fallback = defaults.category(category);
        if entry.description.is_empty() {
            entry.description = fallback.description.clone();
        }
        if entry.materials.is_empty() {
            entry.materials = fallback.materials.clone();
        }
    }

    table
}
