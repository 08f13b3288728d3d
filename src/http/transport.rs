use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::args::DEFAULT_USER_AGENT;
use crate::error::HttpError;

use super::TransportFailure;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Issues a single GET. Implementations must not reuse connections between
/// calls.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportFailure>;
}

/// `reqwest` transport with keep-alive disabled, so every request pays its
/// own connection setup.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying client cannot be constructed.
    pub fn new(request_timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .http1_only()
            .pool_max_idle_per_host(0)
            .pool_idle_timeout(Some(Duration::from_secs(0)))
            .build()
            .map_err(|err| HttpError::BuildClientFailed { source: err })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportFailure> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify_send_error)?;
        let status = response.status().as_u16();
        let body = read_body(response).await.map_err(classify_body_error)?;
        Ok(TransportResponse { status, body })
    }
}

async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, reqwest::Error> {
    Ok(response.bytes().await?.to_vec())
}

fn classify_send_error(err: reqwest::Error) -> TransportFailure {
    if err.is_timeout() {
        TransportFailure::Timeout
    } else if err.is_connect() {
        TransportFailure::Connect(err.to_string())
    } else {
        TransportFailure::Request(err.to_string())
    }
}

fn classify_body_error(err: reqwest::Error) -> TransportFailure {
    if err.is_timeout() {
        TransportFailure::Timeout
    } else {
        TransportFailure::Body(err.to_string())
    }
}
