use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use fairfence_pricing_data::{PricingRow, PricingTable, PRICING_TABLES};
use serde::Serialize;

use crate::main_lib::AppState;

/// Wire shape of `GET /api/pricing`.
///
/// The `fallback` and `cached` flags derive from the cache's provenance tag;
/// they exist for operational visibility, not end-user error messages.
#[derive(Serialize)]
pub struct PricingResponse {
    pub success: bool,
    pub data: PricingPayload,
    pub cached: bool,
}

#[derive(Serialize)]
pub struct PricingPayload {
    pub tables: Vec<&'static str>,
    pub data: RowsPayload,
    pub fallback: bool,
    pub pricing: PricingTable,
}

#[derive(Serialize)]
pub struct RowsPayload {
    pub pricing: Vec<PricingRow>,
}

/// Serve pricing data. Never fails: the cache resolves to live, cached, or
/// fallback data, so the calculator always has numbers to show.
pub async fn get_pricing(State(state): State<Arc<AppState>>) -> Json<PricingResponse> {
    let result = state.pricing_cache.get_pricing().await;

    Json(PricingResponse {
        success: true,
        cached: result.provenance.is_cached(),
        data: PricingPayload {
            tables: PRICING_TABLES.to_vec(),
            data: RowsPayload {
                pricing: result.rows,
            },
            fallback: result.provenance.is_fallback(),
            pricing: result.pricing,
        },
    })
}
