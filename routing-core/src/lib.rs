//! Core domain types for the routing client.
//!
//! This crate models what the routing service returns: [`Point`]s and
//! [`BoundingBox`]es in a [`CoordinateReferenceSystem`], turn-by-turn
//! [`Instruction`]s and the [`Route`] that owns them. The [`parse`] module
//! turns a raw response into a route or a [`RoutingError`]. Nothing here
//! performs I/O; requests are built and sent by `routing-http`.
//!
//! # Examples
//!
//! ```
//! use routing_core::{RoutingError, parse::parse_response};
//!
//! assert_eq!(parse_response(None, 401), Err(RoutingError::Unauthorised));
//! assert_eq!(parse_response(None, 200), Err(RoutingError::NoDataReceived));
//! ```

#![forbid(unsafe_code)]

mod crs;
mod error;
mod geometry;
mod instruction;
pub mod parse;
mod route;
mod vehicle;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crs::{CoordinateReferenceSystem, UnknownCrsError};
pub use error::RoutingError;
pub use geometry::{BoundingBox, Coordinate, Point};
pub use instruction::Instruction;
pub use route::{Route, RouteError};
pub use vehicle::{RouteFamily, UnknownVehicleError, VehicleType};
