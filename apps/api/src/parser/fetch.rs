//! Document retrieval. The pipeline only needs "bytes for a locator"; the
//! HTTP implementation below is the production backend.

use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use reqwest::Client;
use tracing::debug;

use crate::parser::error::FetchError;

/// Fetches the raw bytes behind a document locator. A single call is one
/// bounded, atomic fetch-or-fail; implementations must not retry.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<Bytes, FetchError>;
}

/// Downloads documents over HTTP(S) with a whole-request timeout and a size cap.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    max_bytes: usize,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, max_bytes: usize) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, max_bytes })
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> Result<Bytes, FetchError> {
        let mut response = self.client.get(locator).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        if let Some(len) = response.content_length() {
            if len > self.max_bytes as u64 {
                return Err(FetchError::TooLarge {
                    limit: self.max_bytes,
                });
            }
        }

        let mut body = BytesMut::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(FetchError::TooLarge {
                    limit: self.max_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        debug!("Fetched {} bytes from {}", body.len(), locator);
        Ok(body.freeze())
    }
}
