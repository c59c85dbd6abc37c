//! `parse` command: decode a captured routing response offline.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use routing_core::Route;
use routing_core::parse::{STATUS_OK, parse_response};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_OUTPUT, ARG_PARSE_RESPONSE, ARG_PARSE_STATUS, CliError, ENV_PARSE_RESPONSE, write_route,
};

/// CLI arguments for the `parse` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "parse",
    long_about = "Parse a routing response body captured to a file, as if the \
                 service had answered with the given status, and print the \
                 resulting route as JSON.",
    about = "Parse a captured routing response"
)]
#[ortho_config(prefix = "ROUTING")]
pub(crate) struct ParseArgs {
    /// Path to the captured response body.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) response_path: Option<Utf8PathBuf>,
    /// HTTP status the body was received with.
    #[arg(long = ARG_PARSE_STATUS, value_name = "code")]
    #[serde(default)]
    pub(crate) status: Option<u16>,
    /// Write the route to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ParseArgs {
    pub(crate) fn into_config(self) -> Result<ParseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ParseConfig::try_from(merged)
    }
}

/// Resolved `parse` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParseConfig {
    /// Path to the captured response body.
    pub(crate) response_path: Utf8PathBuf,
    /// Status passed to the parser.
    pub(crate) status: u16,
    /// Destination file, stdout when `None`.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ParseConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match routing_fs::file_is_file(&self.response_path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_PARSE_RESPONSE,
                path: self.response_path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_PARSE_RESPONSE,
                    path: self.response_path.clone(),
                })
            }
            Err(source) => Err(CliError::ReadSource {
                field: ARG_PARSE_RESPONSE,
                path: self.response_path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<ParseArgs> for ParseConfig {
    type Error = CliError;

    fn try_from(args: ParseArgs) -> Result<Self, Self::Error> {
        let response_path = args.response_path.ok_or(CliError::MissingArgument {
            field: ARG_PARSE_RESPONSE,
            env: ENV_PARSE_RESPONSE,
        })?;
        Ok(Self {
            response_path,
            status: args.status.unwrap_or(STATUS_OK),
            output: args.output,
        })
    }
}

pub(super) fn run_parse(args: ParseArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_parse_with(args, &mut stdout)
}

pub(super) fn run_parse_with(args: ParseArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let route = load_route(&config.response_path, config.status)?;
    write_route(writer, &route, config.output.as_deref())
}

/// Read the body at `path` and parse it as a response with `status`.
///
/// An empty file stands for a response without a body.
pub(super) fn load_route(path: &Utf8Path, status: u16) -> Result<Route, CliError> {
    let bytes = routing_fs::read_file(path).map_err(|source| CliError::ReadSource {
        field: ARG_PARSE_RESPONSE,
        path: path.to_path_buf(),
        source,
    })?;
    debug!("parsing {} bytes from {path} as status {status}", bytes.len());
    let body = (!bytes.is_empty()).then_some(bytes.as_slice());
    parse_response(body, status).map_err(|source| CliError::ParseResponse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ParseConfig, CliError> {
    let merged = ParseArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ParseConfig::try_from(merged)
}
