//! Static built-in pricing dataset.
//!
//! Hand-authored safe defaults, compiled into the binary. Served only when
//! the cache holds no fresh entry and the live fetch fails entirely. Prices
//! are per metre in NZD.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{CategoryPricing, PricingTable};

lazy_static! {
    /// The fallback pricing table, one entry per category.
    pub static ref FALLBACK_PRICING: PricingTable = build_fallback_table();
}

fn price_points(points: &[(&str, Decimal)]) -> BTreeMap<String, Decimal> {
    points
        .iter()
        .map(|(height, price)| (height.to_string(), *price))
        .collect()
}

fn build_fallback_table() -> PricingTable {
    PricingTable {
        timber: CategoryPricing {
            prices: price_points(&[
                ("1.2", dec!(165)),
                ("1.5", dec!(180)),
                ("1.8", dec!(195)),
                ("2.0", dec!(210)),
            ]),
            description: "Classic timber paling fence, built to last with treated pine."
                .to_string(),
            materials: vec![
                "Treated pine palings".to_string(),
                "H4 treated posts".to_string(),
                "Galvanised fixings".to_string(),
            ],
        },
        aluminum: CategoryPricing {
            prices: price_points(&[
                ("1.2", dec!(225)),
                ("1.5", dec!(245)),
                ("1.8", dec!(265)),
            ]),
            description: "Low-maintenance powder-coated aluminium slat fencing.".to_string(),
            materials: vec![
                "Powder-coated aluminium slats".to_string(),
                "Aluminium posts and rails".to_string(),
                "Stainless steel fixings".to_string(),
            ],
        },
        pvc: CategoryPricing {
            prices: price_points(&[
                ("1.2", dec!(205)),
                ("1.5", dec!(225)),
                ("1.8", dec!(245)),
            ]),
            description: "Clean-look PVC privacy fencing that never needs painting.".to_string(),
            materials: vec![
                "UV-stabilised PVC panels".to_string(),
                "PVC posts with steel inserts".to_string(),
                "Concrete footings".to_string(),
            ],
        },
        rural: CategoryPricing {
            prices: price_points(&[
                ("1.0", dec!(35)),
                ("1.2", dec!(45)),
                ("1.4", dec!(55)),
            ]),
            description: "Post and wire rural fencing for paddocks and lifestyle blocks."
                .to_string(),
            materials: vec![
                "Round wooden posts".to_string(),
                "High-tensile wire".to_string(),
                "Staples and strainers".to_string(),
            ],
        },
    }
}
