//! Travel profiles and the server-side route family each one selects.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The travel mode a route is computed for.
///
/// Foot and mountain-bike routing is served by a separate endpoint family
/// from motor vehicles; see [`VehicleType::route_family`].
///
/// # Examples
/// ```
/// use routing_core::{RouteFamily, VehicleType};
///
/// let vehicle: VehicleType = "mtb".parse()?;
/// assert_eq!(vehicle, VehicleType::MountainBike);
/// assert_eq!(vehicle.route_family(), RouteFamily::NonVehicle);
/// assert_eq!(vehicle.route_family().path_segment(), "nonvehicle_routing_api");
/// # Ok::<(), routing_core::UnknownVehicleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VehicleType {
    /// Private car.
    #[default]
    Car,
    /// Emergency vehicle, permitted on restricted carriageways.
    #[cfg_attr(feature = "serde", serde(rename = "emv"))]
    EmergencyVehicle,
    /// Walking.
    Foot,
    /// Mountain bike.
    #[cfg_attr(feature = "serde", serde(rename = "mtb"))]
    MountainBike,
}

impl VehicleType {
    /// Every supported profile.
    pub const ALL: [Self; 4] = [
        Self::Car,
        Self::EmergencyVehicle,
        Self::Foot,
        Self::MountainBike,
    ];

    /// Profile code sent as the `vehicle` request parameter.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::EmergencyVehicle => "emv",
            Self::Foot => "foot",
            Self::MountainBike => "mtb",
        }
    }

    /// Endpoint family serving this profile.
    #[must_use]
    pub const fn route_family(self) -> RouteFamily {
        match self {
            Self::Car | Self::EmergencyVehicle => RouteFamily::Vehicle,
            Self::Foot | Self::MountainBike => RouteFamily::NonVehicle,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string does not name a supported travel profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vehicle type '{0}'")]
pub struct UnknownVehicleError(pub String);

impl FromStr for VehicleType {
    type Err = UnknownVehicleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|vehicle| vehicle.code() == s)
            .ok_or_else(|| UnknownVehicleError(s.to_owned()))
    }
}

/// Server-side routing algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteFamily {
    /// Road network for motor vehicles.
    Vehicle,
    /// Paths and trails for walkers and cyclists.
    NonVehicle,
}

impl RouteFamily {
    /// URL path segment addressing this family.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Vehicle => "routing_api",
            Self::NonVehicle => "nonvehicle_routing_api",
        }
    }
}
