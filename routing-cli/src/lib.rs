//! Command-line interface for the routing client.
//!
//! `routing route` asks the live service for a route and `routing parse`
//! decodes a captured response offline. Both print the route as JSON.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use log::info;
use routing_core::Route;

mod error;
mod parse;
mod route;

pub use error::CliError;

use parse::{ParseArgs, run_parse};
use route::{RouteArgs, run_route};

const ARG_ROUTE_POINTS: &str = "points";
const ARG_ROUTE_VEHICLE: &str = "vehicle";
const ARG_ROUTE_CRS: &str = "crs";
const ARG_ROUTE_API_KEY: &str = "api-key";
const ARG_ROUTE_BASE_URL: &str = "base-url";
const ARG_ROUTE_TIMEOUT: &str = "timeout-secs";
const ARG_PARSE_RESPONSE: &str = "response";
const ARG_PARSE_STATUS: &str = "status";
const ARG_OUTPUT: &str = "output";
const ENV_ROUTE_POINTS: &str = "ROUTING_CMDS_ROUTE_POINTS";
const ENV_ROUTE_API_KEY: &str = "ROUTING_CMDS_ROUTE_API_KEY";
const ENV_PARSE_RESPONSE: &str = "ROUTING_CMDS_PARSE_RESPONSE_PATH";

/// Run the routing CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] describing the first failure: bad arguments,
/// configuration, input, the routing request itself or writing the output.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    match cli.command {
        Command::Route(args) => run_route(args),
        Command::Parse(args) => run_parse(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "routing",
    about = "Request and inspect turn-by-turn routes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Request a route through an ordered list of points.
    Route(RouteArgs),
    /// Parse a captured routing response without contacting the service.
    Parse(ParseArgs),
}

/// Write `route` as pretty JSON to `output` when given, otherwise to
/// `writer`.
fn write_route(
    writer: &mut dyn Write,
    route: &Route,
    output: Option<&Utf8Path>,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_vec_pretty(route).map_err(CliError::SerialiseRoute)?;
    payload.push(b'\n');
    match output {
        Some(path) => {
            routing_fs::write_file(path, &payload).map_err(CliError::WriteOutput)?;
            info!("wrote route with {} points to {path}", route.points().len());
            Ok(())
        }
        None => writer.write_all(&payload).map_err(CliError::WriteOutput),
    }
}

#[cfg(test)]
mod tests;
