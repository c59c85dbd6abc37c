//! Configuration for [`RoutingService`](crate::RoutingService).

use std::fmt;
use std::time::Duration;

use routing_core::{CoordinateReferenceSystem, VehicleType};

/// Default routing API host.
pub const DEFAULT_BASE_URL: &str = "https://api.ordnancesurvey.co.uk";

/// Default user agent for routing requests.
pub const DEFAULT_USER_AGENT: &str = "routing-client/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for a routing service.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use routing_core::{CoordinateReferenceSystem, VehicleType};
/// use routing_http::RoutingServiceConfig;
///
/// let config = RoutingServiceConfig::new("my-key")
///     .with_vehicle(VehicleType::Foot)
///     .with_crs(CoordinateReferenceSystem::Epsg27700)
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.vehicle, VehicleType::Foot);
/// assert!(!format!("{config:?}").contains("my-key"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct RoutingServiceConfig {
    /// Pre-issued API key passed as the `apikey` query parameter.
    pub api_key: String,
    /// Scheme, host and optional path prefix of the routing API.
    pub base_url: String,
    /// Travel profile requested.
    pub vehicle: VehicleType,
    /// Reference system for request and response coordinates.
    pub crs: CoordinateReferenceSystem,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl RoutingServiceConfig {
    /// Create a configuration with the given API key and defaults elsewhere.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            vehicle: VehicleType::default(),
            crs: CoordinateReferenceSystem::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Point the service at another host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the travel profile.
    #[must_use]
    pub const fn with_vehicle(mut self, vehicle: VehicleType) -> Self {
        self.vehicle = vehicle;
        self
    }

    /// Set the coordinate reference system.
    #[must_use]
    pub const fn with_crs(mut self, crs: CoordinateReferenceSystem) -> Self {
        self.crs = crs;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl fmt::Debug for RoutingServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingServiceConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("vehicle", &self.vehicle)
            .field("crs", &self.crs)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
