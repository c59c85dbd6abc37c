//! `route` command: request a route from the live service.

use std::io::Write;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use routing_core::{CoordinateReferenceSystem, Point, VehicleType};
use routing_http::{
    HttpTransport, ReqwestTransport, RoutingService, RoutingServiceConfig, ServiceBuildError,
};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_OUTPUT, ARG_ROUTE_API_KEY, ARG_ROUTE_BASE_URL, ARG_ROUTE_CRS, ARG_ROUTE_POINTS,
    ARG_ROUTE_TIMEOUT, ARG_ROUTE_VEHICLE, CliError, ENV_ROUTE_API_KEY, ENV_ROUTE_POINTS,
    write_route,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "route",
    long_about = "Request a route visiting the given points in order and \
                 print it as JSON. The API key and service settings can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Request a route through an ordered list of points"
)]
#[ortho_config(prefix = "ROUTING")]
pub(crate) struct RouteArgs {
    /// Points to visit, as `x,y` pairs separated by `;`.
    #[arg(long = ARG_ROUTE_POINTS, value_name = "x,y;x,y")]
    #[serde(default)]
    pub(crate) points: Option<String>,
    /// Travel profile code: car, emv, foot or mtb.
    #[arg(long = ARG_ROUTE_VEHICLE, value_name = "code")]
    #[serde(default)]
    pub(crate) vehicle: Option<String>,
    /// Coordinate reference system code, e.g. EPSG:27700.
    #[arg(long = ARG_ROUTE_CRS, value_name = "code")]
    #[serde(default)]
    pub(crate) crs: Option<String>,
    /// API key for the routing service.
    #[arg(long = ARG_ROUTE_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// Base URL of the routing service.
    #[arg(long = ARG_ROUTE_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_ROUTE_TIMEOUT, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Write the route to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    /// Points to visit, in order.
    pub(crate) points: Vec<Point>,
    /// Settings for the routing service.
    pub(crate) service: RoutingServiceConfig,
    /// Destination file, stdout when `None`.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let api_key = args.api_key.ok_or(CliError::MissingArgument {
            field: ARG_ROUTE_API_KEY,
            env: ENV_ROUTE_API_KEY,
        })?;
        let raw_points = args.points.ok_or(CliError::MissingArgument {
            field: ARG_ROUTE_POINTS,
            env: ENV_ROUTE_POINTS,
        })?;
        let points = parse_points(&raw_points)?;

        let vehicle = args
            .vehicle
            .as_deref()
            .map(str::parse::<VehicleType>)
            .transpose()?
            .unwrap_or_default();
        let crs = args
            .crs
            .as_deref()
            .map(str::parse::<CoordinateReferenceSystem>)
            .transpose()?
            .unwrap_or_default();

        let mut service = RoutingServiceConfig::new(api_key)
            .with_vehicle(vehicle)
            .with_crs(crs);
        if let Some(base_url) = args.base_url {
            service = service.with_base_url(base_url);
        }
        if let Some(secs) = args.timeout_secs {
            service = service.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            points,
            service,
            output: args.output,
        })
    }
}

/// Parse `x,y;x,y` into points. Empty segments are ignored so a trailing
/// separator is harmless.
pub(crate) fn parse_points(raw: &str) -> Result<Vec<Point>, CliError> {
    raw.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_point)
        .collect()
}

fn parse_point(segment: &str) -> Result<Point, CliError> {
    let invalid = || CliError::InvalidPoint {
        value: segment.to_owned(),
    };
    let (x, y) = segment.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<f64>().map_err(|_| invalid())?;
    let y = y.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok(Point::new(x, y))
}

/// Builds the HTTP transport for the current route invocation.
pub(super) trait RouteTransportBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn HttpTransport>, CliError>;
}

pub(super) struct DefaultRouteTransportBuilder;

impl RouteTransportBuilder for DefaultRouteTransportBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn HttpTransport>, CliError> {
        let transport = ReqwestTransport::new(config.service.timeout, &config.service.user_agent)
            .map_err(ServiceBuildError::HttpClient)?;
        Ok(Box::new(transport))
    }
}

pub(super) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_route_with(args, &DefaultRouteTransportBuilder, &mut stdout)
}

pub(super) fn run_route_with(
    args: RouteArgs,
    builder: &dyn RouteTransportBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let transport = builder.build(&config)?;
    let service = RoutingService::with_transport(config.service.clone(), transport)?;
    debug!(
        "routing {} points as {} in {}",
        config.points.len(),
        service.vehicle(),
        service.crs()
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let route = runtime.block_on(service.route_between(&config.points))?;
    write_route(writer, &route, config.output.as_deref())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
