use crate::error::ProxyError;
use crate::upstream::Fetch;
use lambda_http::{http::StatusCode, Body, Error, Response};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
const CACHE_CONTROL: &str = "public, max-age=31536000"; // 1 year

/// Proxy an image from an arbitrary URL through Lambda.
/// The bytes go back as a binary body, which the runtime base64-encodes
/// and flags with `isBase64Encoded`.
pub async fn proxy_image(fetcher: &dyn Fetch, image_url: &str) -> Result<Response<Body>, Error> {
    match relay_image(fetcher, image_url).await {
        Ok(response) => Ok(response),
        Err(err) => {
            tracing::error!("Image proxy error for {}: {}", image_url, err);
            err.into_response()
        }
    }
}

async fn relay_image(fetcher: &dyn Fetch, image_url: &str) -> Result<Response<Body>, ProxyError> {
    let upstream = fetcher
        .get(image_url)
        .await
        .map_err(|e| ProxyError::ImageFetch(e.to_string()))?;

    if !upstream.is_success() {
        return Err(ProxyError::ImageFetch(format!(
            "Failed to fetch image: {}",
            upstream.status_text()
        )));
    }

    let content_type = upstream
        .content_type
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Access-Control-Allow-Origin", "*")
        .header("Cache-Control", CACHE_CONTROL)
        .body(Body::Binary(upstream.body))?)
}
