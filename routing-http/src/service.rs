//! Asynchronous client for the routing API.
//!
//! [`RoutingService`] turns an ordered list of points into a signed `GET`
//! request, sends it through an [`HttpTransport`] and hands the response to
//! [`routing_core::parse::parse_response`].
//!
//! # Example
//!
//! ```no_run
//! use routing_core::{Point, VehicleType};
//! use routing_http::{RoutingService, RoutingServiceConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RoutingServiceConfig::new("my-api-key").with_vehicle(VehicleType::Foot);
//! let service = RoutingService::with_config(config)?;
//! let route = service
//!     .route_between(&[Point::new(-3.05, 54.45), Point::new(-3.02, 54.47)])
//!     .await?;
//! println!("{} instructions", route.instructions().len());
//! # Ok(())
//! # }
//! ```

use std::fmt;

use log::{debug, trace};
use routing_core::parse::parse_response;
use routing_core::{Coordinate, CoordinateReferenceSystem, Point, Route, RoutingError, VehicleType};
use thiserror::Error;
use url::Url;

use crate::config::RoutingServiceConfig;
use crate::transport::{HttpTransport, ReqwestTransport, TransportError, redact};

/// Path segment following the route family.
const ROUTE_SEGMENT: &str = "route";

/// Failure to produce a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request was invalid or the response described a failure.
    #[error(transparent)]
    Routing(#[from] RoutingError),
    /// The HTTP exchange itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ServiceError {
    /// The routing failure, when the exchange itself succeeded.
    #[must_use]
    pub const fn routing_error(&self) -> Option<&RoutingError> {
        match self {
            Self::Routing(err) => Some(err),
            Self::Transport(_) => None,
        }
    }
}

/// Failure to construct a [`RoutingService`].
#[derive(Debug, Error)]
pub enum ServiceBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The configured base URL does not parse.
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        source: url::ParseError,
    },
    /// The configured base URL cannot carry a path, e.g. `mailto:`.
    #[error("base URL '{url}' cannot address an HTTP resource")]
    UnsupportedBaseUrl {
        /// The rejected value.
        url: String,
    },
}

/// Client for the routing API.
///
/// All state is immutable configuration, so one service can serve any
/// number of concurrent requests.
pub struct RoutingService<T = ReqwestTransport> {
    transport: T,
    config: RoutingServiceConfig,
    base_url: Url,
}

impl<T> fmt::Debug for RoutingService<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingService")
            .field("config", &self.config)
            .field("transport", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl RoutingService<ReqwestTransport> {
    /// Create a service with default configuration for the given API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ServiceBuildError> {
        Self::with_config(RoutingServiceConfig::new(api_key))
    }

    /// Create a service with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build or the base URL
    /// is unusable.
    pub fn with_config(config: RoutingServiceConfig) -> Result<Self, ServiceBuildError> {
        let transport = ReqwestTransport::new(config.timeout, &config.user_agent)
            .map_err(ServiceBuildError::HttpClient)?;
        Self::with_transport(config, transport)
    }
}

impl<T: HttpTransport> RoutingService<T> {
    /// Create a service sending its requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is unusable.
    pub fn with_transport(
        config: RoutingServiceConfig,
        transport: T,
    ) -> Result<Self, ServiceBuildError> {
        let base_url = parse_base_url(&config.base_url)?;
        Ok(Self {
            transport,
            config,
            base_url,
        })
    }

    /// The API key sent with each request.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// The travel profile requested.
    #[must_use]
    pub const fn vehicle(&self) -> VehicleType {
        self.config.vehicle
    }

    /// The coordinate reference system requested.
    #[must_use]
    pub const fn crs(&self) -> CoordinateReferenceSystem {
        self.config.crs
    }

    /// The parsed base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The transport requests are sent through.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request URL for `points`.
    ///
    /// The path is `{base}/{family}/route`, where the family depends on the
    /// vehicle. Query parameters are `apikey`, `points_encoded=false`, `srs`,
    /// `vehicle` and one `point=x,y` per input point, in input order.
    #[must_use]
    pub fn route_url(&self, points: &[Point]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(self.config.vehicle.route_family().path_segment())
                .push(ROUTE_SEGMENT);
        }
        {
            let mut query = url.query_pairs_mut();
            query
                .clear()
                .append_pair("apikey", &self.config.api_key)
                .append_pair("points_encoded", "false")
                .append_pair("srs", self.config.crs.code())
                .append_pair("vehicle", self.config.vehicle.code());
            for point in points {
                query.append_pair("point", &format!("{},{}", point.x, point.y));
            }
        }
        url
    }

    /// Request a route visiting `points` in order.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::TooFewPoints`] without contacting the service
    /// when fewer than two points are given. Otherwise returns the transport
    /// failure or whatever the response parser reports.
    pub async fn route_between(&self, points: &[Point]) -> Result<Route, ServiceError> {
        if points.len() < 2 {
            return Err(RoutingError::TooFewPoints.into());
        }
        let url = self.route_url(points);
        debug!(
            "requesting {} route through {} points from {}",
            self.config.vehicle,
            points.len(),
            redact(&url)
        );
        let response = self.transport.get(&url).await?;
        trace!("routing service answered with status {}", response.status);
        Ok(parse_response(response.body(), response.status)?)
    }

    /// Request a route visiting geographic `coordinates` in order.
    ///
    /// Each coordinate becomes a point with `x` = longitude and
    /// `y` = latitude.
    ///
    /// # Errors
    ///
    /// As for [`RoutingService::route_between`].
    pub async fn route_between_coordinates(
        &self,
        coordinates: &[Coordinate],
    ) -> Result<Route, ServiceError> {
        let points: Vec<Point> = coordinates.iter().copied().map(Point::from).collect();
        self.route_between(&points).await
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ServiceBuildError> {
    let url = Url::parse(raw).map_err(|source| ServiceBuildError::InvalidBaseUrl {
        url: raw.to_owned(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ServiceBuildError::UnsupportedBaseUrl {
            url: raw.to_owned(),
        });
    }
    Ok(url)
}
