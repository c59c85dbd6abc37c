//! HTTP client for the routing API.
//!
//! This crate provides [`RoutingService`], which builds signed route
//! requests, sends them through an [`HttpTransport`] and parses the answer
//! into a [`routing_core::Route`]. [`CompatRoutingService`] offers the same
//! operations keyed by strings and reporting integer error codes.
//!
//! # Architecture
//!
//! Transport is a trait so that hosts can supply their own HTTP stack and
//! tests can substitute [`test_support::StubTransport`]. The default
//! [`ReqwestTransport`] applies the configured timeout and user agent but no
//! retries.
//!
//! # Example
//!
//! ```no_run
//! use routing_core::Coordinate;
//! use routing_http::RoutingService;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RoutingService::new("my-api-key")?;
//! let route = service
//!     .route_between_coordinates(&[Coordinate::new(50.93, -1.47), Coordinate::new(50.91, -1.40)])
//!     .await?;
//! println!("{:.0} m", route.distance());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod compat;
mod config;
mod service;
mod transport;

#[doc(hidden)]
pub mod test_support;

pub use compat::{BridgedError, CompatConfigError, CompatError, CompatRoutingService, ERROR_DOMAIN};
pub use config::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, RoutingServiceConfig};
pub use service::{RoutingService, ServiceBuildError, ServiceError};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError, redact};
