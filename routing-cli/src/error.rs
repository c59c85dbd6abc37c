//! Error types emitted by the routing CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use routing_core::{RoutingError, UnknownCrsError, UnknownVehicleError};
use routing_http::{ServiceBuildError, ServiceError};
use thiserror::Error;

/// Errors emitted by the routing CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A `--points` entry is not an `x,y` pair of numbers.
    #[error("invalid point {value:?}: expected x,y")]
    InvalidPoint {
        /// The rejected entry.
        value: String,
    },
    /// The vehicle code is not a supported profile.
    #[error(transparent)]
    Vehicle(#[from] UnknownVehicleError),
    /// The reference system code is not supported.
    #[error(transparent)]
    Crs(#[from] UnknownCrsError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument that named the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument that named the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected or read.
    #[error("failed to read {field} path {path:?}: {source}")]
    ReadSource {
        /// Argument that named the path.
        field: &'static str,
        /// The unreadable path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Building the routing service failed.
    #[error("failed to build routing service: {0}")]
    BuildService(#[from] ServiceBuildError),
    /// Starting the async runtime failed.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The routing service did not return a route.
    #[error("route request failed: {0}")]
    Route(#[from] ServiceError),
    /// A captured response did not describe a route.
    #[error("failed to parse response in {path:?} (code {}): {source}", .source.code())]
    ParseResponse {
        /// File holding the response body.
        path: Utf8PathBuf,
        /// Parser failure.
        #[source]
        source: RoutingError,
    },
    /// Serialising the route failed.
    #[error("failed to serialise route: {0}")]
    SerialiseRoute(#[source] serde_json::Error),
    /// Writing the route failed.
    #[error("failed to write route output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
