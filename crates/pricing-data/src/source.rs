//! Pricing source abstraction and the edge function implementation.

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::{CallOptions, EdgeFunctionClient};
use crate::errors::PricingDataError;
use crate::models::PricingRow;

/// Name of the edge function serving pricing rows.
pub const GET_PRICING_FUNCTION: &str = "get-pricing";

/// Database tables the pricing payload is derived from.
pub const PRICING_TABLES: &[&str] = &["fence_pricing"];

/// A source of raw pricing rows.
///
/// The cache treats this as a black-box callable; the production
/// implementation is [`EdgeFunctionPricingSource`].
#[async_trait]
pub trait PricingSource: Send + Sync {
    /// Fetch the current pricing rows, applying whatever internal retry
    /// policy the source carries.
    async fn fetch_pricing(&self) -> Result<Vec<PricingRow>, PricingDataError>;
}

#[derive(Debug, Deserialize)]
struct GetPricingResponse {
    success: bool,
    data: GetPricingData,
}

#[derive(Debug, Deserialize)]
struct GetPricingData {
    pricing: Vec<PricingRow>,
}

/// Fetches pricing rows from the `get-pricing` edge function.
pub struct EdgeFunctionPricingSource {
    client: EdgeFunctionClient,
}

impl EdgeFunctionPricingSource {
    pub fn new(client: EdgeFunctionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PricingSource for EdgeFunctionPricingSource {
    async fn fetch_pricing(&self) -> Result<Vec<PricingRow>, PricingDataError> {
        let response: GetPricingResponse = self
            .client
            .call(GET_PRICING_FUNCTION, CallOptions::default())
            .await?;

        // An application-level failure in a 2xx envelope is permanent.
        if !response.success {
            return Err(PricingDataError::InvalidResponse {
                function: GET_PRICING_FUNCTION.to_string(),
                message: "edge function reported failure".to_string(),
            });
        }

        Ok(response.data.pricing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_envelope_decodes() {
        let payload = serde_json::json!({
            "success": true,
            "data": {
                "pricing": [
                    { "category": "Timber Paling", "height": 1.8, "price_per_metre": 195 }
                ]
            }
        });

        let response: GetPricingResponse = serde_json::from_value(payload).unwrap();
        assert!(response.success);
        assert_eq!(response.data.pricing.len(), 1);
        assert_eq!(response.data.pricing[0].category, "Timber Paling");
    }
}
