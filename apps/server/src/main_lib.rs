use std::sync::Arc;

use fairfence_pricing_data::{
    EdgeFunctionClient, EdgeFunctionConfig, EdgeFunctionPricingSource, PricingCache,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Shared application state handed to every request handler.
pub struct AppState {
    pub pricing_cache: Arc<PricingCache>,
}

/// Install the global tracing subscriber (fmt layer + `RUST_LOG` filter).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Build the application state: edge function config is read once here and
/// injected, so a misconfigured deployment fails at startup rather than on
/// the first pricing request.
pub fn build_state(_config: &Config) -> anyhow::Result<Arc<AppState>> {
    let edge_config = EdgeFunctionConfig::from_env()?;
    let client = EdgeFunctionClient::new(edge_config);
    let source = Arc::new(EdgeFunctionPricingSource::new(client));
    let pricing_cache = Arc::new(PricingCache::new(source));

    Ok(Arc::new(AppState { pricing_cache }))
}
