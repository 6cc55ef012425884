pub mod config;
pub mod error;
pub mod image_proxy;
pub mod responses;
pub mod rover_api;
pub mod types;
pub mod upstream;

#[cfg(any(test, feature = "test-util"))]
pub mod mock;

use config::ProxyConfig;
use std::sync::Arc;
use upstream::Fetch;

/// Shared application state
pub struct AppState {
    pub config: ProxyConfig,
    pub fetcher: Arc<dyn Fetch>,
}

impl AppState {
    pub fn new(config: ProxyConfig, fetcher: Arc<dyn Fetch>) -> Arc<Self> {
        Arc::new(Self { config, fetcher })
    }
}
