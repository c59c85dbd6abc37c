//! String-keyed facade over [`RoutingService`] for hosts that cannot use the
//! typed enums directly.
//!
//! Profiles and reference systems are passed as their wire codes, and
//! routing failures are reported as a [`BridgedError`] carrying the stable
//! integer code from [`RoutingError::code`].

use std::fmt;

use routing_core::{
    Coordinate, CoordinateReferenceSystem, Point, Route, RoutingError, UnknownCrsError,
    UnknownVehicleError, VehicleType,
};
use thiserror::Error;

use crate::config::RoutingServiceConfig;
use crate::service::{RoutingService, ServiceBuildError, ServiceError};
use crate::transport::{HttpTransport, ReqwestTransport, TransportError};

/// Domain attached to every [`BridgedError`].
pub const ERROR_DOMAIN: &str = "routing";

/// A [`RoutingError`] flattened to a domain, an integer code and an optional
/// message.
///
/// Only codes 7 (bad request) and 8 (server error) carry a message.
///
/// # Examples
/// ```
/// use routing_core::RoutingError;
/// use routing_http::BridgedError;
///
/// let bridged = BridgedError::from(RoutingError::BadRequest("Point 1 is out of bounds".into()));
/// assert_eq!(bridged.code, 7);
/// assert_eq!(bridged.message.as_deref(), Some("Point 1 is out of bounds"));
/// assert_eq!(
///     bridged.into_routing_error(),
///     Some(RoutingError::BadRequest("Point 1 is out of bounds".into()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgedError {
    /// Always [`ERROR_DOMAIN`].
    pub domain: &'static str,
    /// Stable code of the originating [`RoutingError`].
    pub code: u8,
    /// Server-supplied message, if the variant carries one.
    pub message: Option<String>,
}

impl BridgedError {
    /// Recover the typed error. Returns `None` for codes outside the
    /// taxonomy.
    #[must_use]
    pub fn into_routing_error(self) -> Option<RoutingError> {
        RoutingError::from_code(self.code, self.message)
    }
}

impl From<RoutingError> for BridgedError {
    fn from(error: RoutingError) -> Self {
        Self {
            domain: ERROR_DOMAIN,
            code: error.code(),
            message: error.message().map(str::to_owned),
        }
    }
}

impl fmt::Display for BridgedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error {}", self.domain, self.code)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for BridgedError {}

/// Failure to construct a [`CompatRoutingService`].
#[derive(Debug, Error)]
pub enum CompatConfigError {
    /// The vehicle string is not a supported profile code.
    #[error(transparent)]
    Vehicle(#[from] UnknownVehicleError),
    /// The reference system string is not a supported code.
    #[error(transparent)]
    Crs(#[from] UnknownCrsError),
    /// The underlying service could not be built.
    #[error(transparent)]
    Build(#[from] ServiceBuildError),
}

/// Failure reported by [`CompatRoutingService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompatError {
    /// A routing failure, bridged to its integer code.
    #[error(transparent)]
    Routing(BridgedError),
    /// The HTTP exchange itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl From<ServiceError> for CompatError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::Routing(err) => Self::Routing(err.into()),
            ServiceError::Transport(err) => Self::Transport(err),
        }
    }
}

/// [`RoutingService`] configured from strings.
#[derive(Debug)]
pub struct CompatRoutingService<T = ReqwestTransport> {
    inner: RoutingService<T>,
}

impl CompatRoutingService<ReqwestTransport> {
    /// Validate `vehicle` and `crs` and build a service.
    ///
    /// `crs` defaults to `EPSG:3857` when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if either code is unknown or the HTTP client fails
    /// to build.
    ///
    /// # Examples
    /// ```
    /// use routing_http::{CompatConfigError, CompatRoutingService};
    ///
    /// let service = CompatRoutingService::new("key", "foot", None)?;
    /// assert_eq!(service.crs(), "EPSG:3857");
    ///
    /// let err = CompatRoutingService::new("key", "bicycle", None).expect_err("unknown profile");
    /// assert!(matches!(err, CompatConfigError::Vehicle(_)));
    /// # Ok::<(), CompatConfigError>(())
    /// ```
    pub fn new(
        api_key: impl Into<String>,
        vehicle: &str,
        crs: Option<&str>,
    ) -> Result<Self, CompatConfigError> {
        let config = config_from_codes(api_key, vehicle, crs)?;
        Ok(Self {
            inner: RoutingService::with_config(config)?,
        })
    }
}

impl<T: HttpTransport> CompatRoutingService<T> {
    /// Validate `vehicle` and `crs` and build a service over `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if either code is unknown.
    pub fn with_transport(
        api_key: impl Into<String>,
        vehicle: &str,
        crs: Option<&str>,
        transport: T,
    ) -> Result<Self, CompatConfigError> {
        let config = config_from_codes(api_key, vehicle, crs)?;
        Ok(Self {
            inner: RoutingService::with_transport(config, transport)?,
        })
    }

    /// The typed service being wrapped.
    #[must_use]
    pub const fn inner(&self) -> &RoutingService<T> {
        &self.inner
    }

    /// Profile code in use.
    #[must_use]
    pub const fn vehicle_type(&self) -> &'static str {
        self.inner.vehicle().code()
    }

    /// Reference system code in use.
    #[must_use]
    pub const fn crs(&self) -> &'static str {
        self.inner.crs().code()
    }

    /// Request a route visiting `points` in order.
    ///
    /// # Errors
    ///
    /// Routing failures are bridged to [`BridgedError`]; transport failures
    /// pass through unchanged.
    pub async fn route_between_points(&self, points: &[Point]) -> Result<Route, CompatError> {
        Ok(self.inner.route_between(points).await?)
    }

    /// Request a route visiting geographic `coordinates` in order.
    ///
    /// # Errors
    ///
    /// As for [`CompatRoutingService::route_between_points`].
    pub async fn route_between_coordinates(
        &self,
        coordinates: &[Coordinate],
    ) -> Result<Route, CompatError> {
        Ok(self.inner.route_between_coordinates(coordinates).await?)
    }
}

impl CompatRoutingService {
    /// Code for [`VehicleType::Car`].
    #[must_use]
    pub const fn car_vehicle_type() -> &'static str {
        VehicleType::Car.code()
    }

    /// Code for [`VehicleType::EmergencyVehicle`].
    #[must_use]
    pub const fn emergency_vehicle_type() -> &'static str {
        VehicleType::EmergencyVehicle.code()
    }

    /// Code for [`VehicleType::Foot`].
    #[must_use]
    pub const fn foot_vehicle_type() -> &'static str {
        VehicleType::Foot.code()
    }

    /// Code for [`VehicleType::MountainBike`].
    #[must_use]
    pub const fn mountain_bike_vehicle_type() -> &'static str {
        VehicleType::MountainBike.code()
    }

    /// Code for [`CoordinateReferenceSystem::Bng`].
    #[must_use]
    pub const fn bng_crs() -> &'static str {
        CoordinateReferenceSystem::Bng.code()
    }

    /// Code for [`CoordinateReferenceSystem::Epsg27700`].
    #[must_use]
    pub const fn epsg_27700() -> &'static str {
        CoordinateReferenceSystem::Epsg27700.code()
    }

    /// Code for [`CoordinateReferenceSystem::Epsg3857`].
    #[must_use]
    pub const fn epsg_3857() -> &'static str {
        CoordinateReferenceSystem::Epsg3857.code()
    }
}

fn config_from_codes(
    api_key: impl Into<String>,
    vehicle: &str,
    crs: Option<&str>,
) -> Result<RoutingServiceConfig, CompatConfigError> {
    let vehicle: VehicleType = vehicle.parse()?;
    let crs = crs
        .map(str::parse::<CoordinateReferenceSystem>)
        .transpose()?
        .unwrap_or_default();
    Ok(RoutingServiceConfig::new(api_key)
        .with_vehicle(vehicle)
        .with_crs(crs))
}
