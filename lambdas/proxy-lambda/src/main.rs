use lambda_http::{run, service_fn, tracing, Error, Request};
use rover_proxy_shared::{config::ProxyConfig, upstream::HttpFetcher, AppState};
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Read config and build the HTTP client once at startup
    let config = ProxyConfig::from_env();
    if config.api_key().is_none() {
        tracing::warn!("NASA_API_KEY is not set; rover API requests will return 500");
    }
    tracing::info!("Starting rover proxy with {:?}", config);

    let state = AppState::new(config, Arc::new(HttpFetcher::new()?));

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
