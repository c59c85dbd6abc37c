//! Test utilities for the routing service.
//!
//! [`StubTransport`] is a deterministic [`HttpTransport`] returning a
//! pre-configured outcome and recording every URL it was asked for, so tests
//! can check both the request and the parsed result without a server.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use routing_core::Point;
//! use routing_core::test_support::CANNED_ROUTE_RESPONSE;
//! use routing_http::test_support::{StubTransport, block_on_for_tests};
//! use routing_http::{RoutingService, RoutingServiceConfig};
//!
//! let transport = Arc::new(StubTransport::with_response(200, Some(CANNED_ROUTE_RESPONSE)));
//! let service = RoutingService::with_transport(RoutingServiceConfig::new("key"), Arc::clone(&transport))?;
//!
//! let route = block_on_for_tests(service.route_between(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]))?;
//! assert_eq!(route.points().len(), 62);
//! assert_eq!(transport.request_count(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use url::Url;

use crate::transport::{HttpResponse, HttpTransport, TransportError};

/// Stub [`HttpTransport`] for testing.
#[derive(Debug)]
pub struct StubTransport {
    outcome: Result<HttpResponse, TransportError>,
    requests: Mutex<Vec<Url>>,
}

impl StubTransport {
    /// Answer every request with `status` and `body`.
    #[must_use]
    pub fn with_response(status: u16, body: Option<&str>) -> Self {
        Self::with_outcome(Ok(HttpResponse::new(
            status,
            body.map(|text| text.as_bytes().to_vec()),
        )))
    }

    /// Fail every request with `error`.
    #[must_use]
    pub fn with_error(error: TransportError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<HttpResponse, TransportError>) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// URLs requested so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<Url> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests made so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.clone());
        self.outcome.clone()
    }
}

/// Drive `future` to completion on a fresh current-thread runtime.
///
/// # Panics
///
/// Panics if the runtime cannot be built.
#[expect(
    clippy::expect_used,
    reason = "test helper; a runtime that cannot start should abort the test"
)]
pub fn block_on_for_tests<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime should build")
        .block_on(future)
}
