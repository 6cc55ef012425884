use crate::types::UpstreamResponse;
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{header::CONTENT_TYPE, Client};
use thiserror::Error;

/// Transport-level failure talking to an upstream host
#[derive(Debug, Error)]
#[error("{0}")]
pub struct FetchError(String);

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

// reqwest puts the request URL in its messages, and ours carry the API key
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.without_url().to_string())
    }
}

/// Outbound GET used by both relay branches
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch `url` and buffer the whole body
    async fn get(&self, url: &str) -> Result<UpstreamResponse, FetchError>;
}

/// Production fetcher backed by a single reused `reqwest::Client`
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<UpstreamResponse, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned());
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await?.to_vec();

        Ok(UpstreamResponse {
            status,
            reason,
            content_type,
            body,
        })
    }
}
