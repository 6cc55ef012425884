use lambda_http::{http::Method, Body, Error, Request, Response};
use rover_proxy_shared::{
    image_proxy, responses, rover_api,
    types::{ProxyQuery, ProxyRequest},
    AppState,
};
use std::sync::Arc;

/// Main Lambda handler - relays to an image host or the rover photo API
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();

    // Handle CORS preflight
    if *method == Method::OPTIONS {
        return responses::cors_preflight();
    }

    let request = ProxyQuery::from_request(&event).resolve();
    tracing::info!("Rover proxy invoked - Method: {} Route: {}", method, request);

    match request {
        ProxyRequest::ImageRelay { url } => {
            image_proxy::proxy_image(state.fetcher.as_ref(), &url).await
        }
        ProxyRequest::Api(route) => {
            rover_api::proxy_rover_api(state.fetcher.as_ref(), &state.config, &route).await
        }
    }
}
