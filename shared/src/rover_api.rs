use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::responses::json_response;
use crate::types::ApiRoute;
use crate::upstream::Fetch;
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde_json::Value;

pub const DEFAULT_API_BASE_URL: &str = "https://api.nasa.gov/mars-photos/api/v1";

/// Upstream URL for a rover API route.
/// Rover and sol go into the URL exactly as the caller sent them.
pub fn endpoint_url(base_url: &str, route: &ApiRoute, api_key: &str) -> String {
    match route {
        ApiRoute::LatestPhotos { rover } => {
            format!("{}/rovers/{}/latest_photos?api_key={}", base_url, rover, api_key)
        }
        ApiRoute::PhotosBySol { rover, sol } => {
            format!("{}/rovers/{}/photos?sol={}&api_key={}", base_url, rover, sol, api_key)
        }
        ApiRoute::Manifest { rover } => {
            format!("{}/manifests/{}?api_key={}", base_url, rover, api_key)
        }
    }
}

/// Relay a rover photo/manifest request, injecting the server-held key
pub async fn proxy_rover_api(
    fetcher: &dyn Fetch,
    config: &ProxyConfig,
    route: &ApiRoute,
) -> Result<Response<Body>, Error> {
    match fetch_rover_data(fetcher, config, route).await {
        Ok(data) => json_response(StatusCode::OK, &data),
        Err(err) => {
            // Never log the upstream URL, it carries the key
            tracing::error!("Rover API error for {}: {}", route, err);
            err.into_response()
        }
    }
}

async fn fetch_rover_data(
    fetcher: &dyn Fetch,
    config: &ProxyConfig,
    route: &ApiRoute,
) -> Result<Value, ProxyError> {
    let api_key = config.api_key().ok_or(ProxyError::MissingApiKey)?;

    let url = endpoint_url(config.api_base_url(), route, api_key);

    let upstream = fetcher
        .get(&url)
        .await
        .map_err(|e| ProxyError::ApiFetch(e.to_string()))?;

    if !upstream.is_success() {
        return Err(ProxyError::ApiFetch(format!(
            "NASA API returned status {}: {}",
            upstream.status,
            upstream.text()
        )));
    }

    serde_json::from_slice(&upstream.body)
        .map_err(|e| ProxyError::ApiFetch(format!("invalid JSON in response: {}", e)))
}
