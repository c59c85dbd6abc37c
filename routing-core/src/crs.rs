//! Coordinate reference systems understood by the routing service.
//!
//! Each variant has a canonical wire code used both in the `srs` request
//! parameter and in the `crs.properties.name` field of responses.
//!
//! # Examples
//! ```
//! use routing_core::CoordinateReferenceSystem;
//!
//! let crs: CoordinateReferenceSystem = "EPSG:27700".parse()?;
//! assert_eq!(crs, CoordinateReferenceSystem::Epsg27700);
//! assert_eq!(crs.to_string(), "EPSG:27700");
//! assert!(!crs.is_geographic());
//! # Ok::<(), routing_core::UnknownCrsError>(())
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported spatial reference identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordinateReferenceSystem {
    /// British National Grid, short form.
    #[cfg_attr(feature = "serde", serde(rename = "bng"))]
    Bng,
    /// British National Grid.
    #[cfg_attr(feature = "serde", serde(rename = "EPSG:27700"))]
    Epsg27700,
    /// World Geodetic System 1984, short form.
    #[cfg_attr(feature = "serde", serde(rename = "WGS:84"))]
    Wgs84,
    /// World Geodetic System 1984.
    #[cfg_attr(feature = "serde", serde(rename = "EPSG:4326"))]
    Epsg4326,
    /// Web Mercator.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "EPSG:3857"))]
    Epsg3857,
    /// European Terrestrial Reference System 1989.
    #[cfg_attr(feature = "serde", serde(rename = "EPSG:4258"))]
    Epsg4258,
}

impl CoordinateReferenceSystem {
    /// Every supported reference system.
    pub const ALL: [Self; 6] = [
        Self::Bng,
        Self::Epsg27700,
        Self::Wgs84,
        Self::Epsg4326,
        Self::Epsg3857,
        Self::Epsg4258,
    ];

    /// Canonical wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Bng => "bng",
            Self::Epsg27700 => "EPSG:27700",
            Self::Wgs84 => "WGS:84",
            Self::Epsg4326 => "EPSG:4326",
            Self::Epsg3857 => "EPSG:3857",
            Self::Epsg4258 => "EPSG:4258",
        }
    }

    /// Whether coordinates are latitude/longitude rather than projected
    /// easting/northing.
    #[must_use]
    pub const fn is_geographic(self) -> bool {
        matches!(self, Self::Wgs84 | Self::Epsg4326 | Self::Epsg4258)
    }
}

impl fmt::Display for CoordinateReferenceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string does not name a supported reference system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown coordinate reference system '{0}'")]
pub struct UnknownCrsError(pub String);

impl FromStr for CoordinateReferenceSystem {
    type Err = UnknownCrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|crs| crs.code() == s)
            .ok_or_else(|| UnknownCrsError(s.to_owned()))
    }
}
