//! Facade crate for the routing client.
//!
//! This crate re-exports the route model and parser, and exposes the HTTP
//! service and its compatibility wrapper behind the `http` feature.

#![forbid(unsafe_code)]

pub use routing_core::parse;
pub use routing_core::{
    BoundingBox, Coordinate, CoordinateReferenceSystem, Instruction, Point, Route, RouteError,
    RouteFamily, RoutingError, UnknownCrsError, UnknownVehicleError, VehicleType,
};

#[cfg(feature = "test-support")]
pub use routing_core::test_support;

#[cfg(feature = "http")]
pub use routing_http::{
    BridgedError, CompatConfigError, CompatError, CompatRoutingService, HttpResponse,
    HttpTransport, ReqwestTransport, RoutingService, RoutingServiceConfig, ServiceBuildError,
    ServiceError, TransportError,
};
