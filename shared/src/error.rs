use crate::responses::json_response;
use lambda_http::{http::StatusCode, Body, Error, Response};
use thiserror::Error;

/// Everything that can go wrong while relaying a request.
///
/// None of these escape the handler; each becomes a 500 with a JSON
/// `{"error": ...}` body built from the `Display` message.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("API Key is missing.")]
    MissingApiKey,

    #[error("Failed to proxy image: {0}")]
    ImageFetch(String),

    #[error("Failed to fetch data from NASA: {0}")]
    ApiFetch(String),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl ProxyError {
    pub fn into_response(self) -> Result<Response<Body>, Error> {
        json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &serde_json::json!({ "error": self.to_string() }),
        )
    }
}

impl From<lambda_http::http::Error> for ProxyError {
    fn from(err: lambda_http::http::Error) -> Self {
        ProxyError::Unexpected(err.to_string())
    }
}
