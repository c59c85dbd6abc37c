//! The HTTP collaborator the routing service sends its requests through.
//!
//! [`HttpTransport`] is the seam: the service only needs a `GET` that yields
//! a status and an optional body. [`ReqwestTransport`] is the production
//! implementation; tests substitute a stub.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::trace;
use reqwest::Client;
use thiserror::Error;
use url::Url;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, `None` when the server sent no bytes.
    pub body: Option<Vec<u8>>,
}

impl HttpResponse {
    /// Construct a response from its parts.
    #[must_use]
    pub const fn new(status: u16, body: Option<Vec<u8>>) -> Self {
        Self { status, body }
    }

    /// Borrow the body bytes, if any.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

/// Failure to complete an HTTP exchange.
///
/// URLs are recorded without their query string so the API key never ends
/// up in error messages or logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be sent or the body could not be read.
    #[error("network error requesting {url}: {message}")]
    Network {
        /// Requested URL, without query.
        url: String,
        /// Description of the failure.
        message: String,
    },
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL, without query.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
}

/// Asynchronous `GET` primitive used by the routing service.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch `url`, returning whatever status the server answered with.
    ///
    /// Non-success statuses are not errors at this layer; the caller decides
    /// what they mean.
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Box<T> {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        (**self).get(url).await
    }
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        (**self).get(url).await
    }
}

/// [`HttpTransport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Build a client applying `timeout` to connection and whole request.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the HTTP client fails to build.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self::from_client(client, timeout))
    }

    /// Wrap an existing client. `timeout` is only used to describe timeouts
    /// in errors and should match the client's own setting.
    #[must_use]
    pub const fn from_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    fn convert_reqwest_error(&self, error: reqwest::Error, url: &Url) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                url: redact(url),
                timeout_secs: self.timeout.as_secs(),
            };
        }

        TransportError::Network {
            url: redact(url),
            message: error.without_url().to_string(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err, url))?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| self.convert_reqwest_error(err, url))?;
        trace!("received {} bytes with status {status}", bytes.len());
        let body = (!bytes.is_empty()).then(|| bytes.to_vec());
        Ok(HttpResponse::new(status, body))
    }
}

/// Render `url` without its query string.
#[must_use]
pub fn redact(url: &Url) -> String {
    let mut redacted = url.clone();
    redacted.set_query(None);
    redacted.into()
}
