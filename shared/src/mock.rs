//! Canned upstream for tests. Records every URL it is asked for.

use crate::types::UpstreamResponse;
use crate::upstream::{Fetch, FetchError};
use async_trait::async_trait;
use std::sync::Mutex;

pub struct MockFetcher {
    reply: Result<UpstreamResponse, String>,
    urls: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Answer every call with `response`
    pub fn responding(response: UpstreamResponse) -> Self {
        Self {
            reply: Ok(response),
            urls: Mutex::new(Vec::new()),
        }
    }

    /// 200 with the given content type and body
    pub fn ok(content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
        Self::responding(UpstreamResponse {
            status: 200,
            reason: None,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        })
    }

    pub fn status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::responding(UpstreamResponse {
            status,
            reason: None,
            content_type: None,
            body: body.into(),
        })
    }

    /// Fail every call at the transport level
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().map(|urls| urls.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.urls().len()
    }
}

#[async_trait]
impl Fetch for MockFetcher {
    async fn get(&self, url: &str) -> Result<UpstreamResponse, FetchError> {
        if let Ok(mut urls) = self.urls.lock() {
            urls.push(url.to_string());
        }
        self.reply.clone().map_err(FetchError::new)
    }
}
