//! Conversion of routing service responses into [`Route`] values.
//!
//! Parsing happens in three stages that can be exercised independently:
//!
//! 1. [`parse_response`] dispatches on the HTTP status and decodes the body.
//! 2. [`route_from_json`] validates the structure of a decoded success body.
//!    Missing sections are fatal and map to a specific [`RoutingError`].
//! 3. [`instruction_from_json`] and [`point_from_json`] convert individual
//!    array elements. Malformed elements are dropped rather than failing the
//!    whole route.
//!
//! Every coordinate pair on the wire is read as `[x, y]` and the bounding
//! box as `[min_x, min_y, max_x, max_y]`, whatever the reference system.
//!
//! # Examples
//! ```
//! use routing_core::{RoutingError, parse::parse_response};
//!
//! let body = br#"{"error":{"message":"Point 2 is out of bounds"}}"#;
//! let err = parse_response(Some(body), 400).expect_err("400 is an error");
//! assert_eq!(err, RoutingError::BadRequest("Point 2 is out of bounds".into()));
//! ```

mod elements;
mod structure;

use log::debug;
use serde_json::Value;

use crate::{Route, RoutingError};

pub use elements::{instruction_from_json, point_from_json};
pub use structure::route_from_json;

/// Status returned alongside a route body.
pub const STATUS_OK: u16 = 200;
/// Status returned when the request parameters are rejected.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// Status returned when the API key is missing or invalid.
pub const STATUS_UNAUTHORISED: u16 = 401;
/// Status returned when the service fails internally.
pub const STATUS_SERVER_ERROR: u16 = 500;

/// Turn a response body and its HTTP status into a route.
///
/// The status is inspected first and decides the outcome independently of
/// the body's shape; only a `200` body is parsed as a route.
///
/// # Errors
///
/// Returns the [`RoutingError`] matching the status, or the structural
/// failure found in a `200` body.
pub fn parse_response(body: Option<&[u8]>, status: u16) -> Result<Route, RoutingError> {
    match status {
        STATUS_OK => parse_route_body(body),
        STATUS_BAD_REQUEST => Err(RoutingError::BadRequest(error_message(body))),
        STATUS_UNAUTHORISED => Err(RoutingError::Unauthorised),
        STATUS_SERVER_ERROR => Err(RoutingError::ServerError(error_message(body))),
        _ => Err(RoutingError::UnknownError),
    }
}

/// Parse a success body.
///
/// # Errors
///
/// Returns [`RoutingError::NoDataReceived`] when the body is absent,
/// [`RoutingError::FailedToParseJson`] when it is not JSON, and otherwise
/// whatever [`route_from_json`] reports.
pub fn parse_route_body(body: Option<&[u8]>) -> Result<Route, RoutingError> {
    let bytes = body.ok_or(RoutingError::NoDataReceived)?;
    let json: Value = serde_json::from_slice(bytes).map_err(|err| {
        debug!("route body is not valid JSON: {err}");
        RoutingError::FailedToParseJson
    })?;
    route_from_json(&json)
}

/// Extract `error.message` from an error body, or an empty string when the
/// body is absent, not JSON, or lacks the field.
fn error_message(body: Option<&[u8]>) -> String {
    body.and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok())
        .and_then(|json| {
            json.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ERROR_BODY: &[u8] = br#"{"error":{"message":"m"}}"#;

    #[rstest]
    #[case(Some(ERROR_BODY))]
    #[case(Some(b"not json".as_slice()))]
    #[case(None)]
    fn unauthorised_ignores_body(#[case] body: Option<&[u8]>) {
        assert_eq!(parse_response(body, 401), Err(RoutingError::Unauthorised));
    }

    #[rstest]
    #[case(Some(ERROR_BODY), "m")]
    #[case(Some(br#"{"error":{}}"#.as_slice()), "")]
    #[case(Some(br#"{"error":{"message":7}}"#.as_slice()), "")]
    #[case(Some(b"<html>".as_slice()), "")]
    #[case(None, "")]
    fn bad_request_extracts_message(#[case] body: Option<&[u8]>, #[case] message: &str) {
        assert_eq!(
            parse_response(body, 400),
            Err(RoutingError::BadRequest(message.to_owned()))
        );
    }

    #[rstest]
    #[case(Some(ERROR_BODY), "m")]
    #[case(None, "")]
    fn server_error_extracts_message(#[case] body: Option<&[u8]>, #[case] message: &str) {
        assert_eq!(
            parse_response(body, 500),
            Err(RoutingError::ServerError(message.to_owned()))
        );
    }

    #[rstest]
    #[case(123)]
    #[case(201)]
    #[case(403)]
    #[case(404)]
    #[case(503)]
    fn other_statuses_are_unknown(#[case] status: u16) {
        assert_eq!(
            parse_response(Some(ERROR_BODY), status),
            Err(RoutingError::UnknownError)
        );
    }

    #[rstest]
    fn missing_success_body_reports_no_data() {
        assert_eq!(parse_response(None, 200), Err(RoutingError::NoDataReceived));
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"{".as_slice())]
    #[case(b"<html></html>".as_slice())]
    fn malformed_success_body_fails_to_parse(#[case] body: &[u8]) {
        assert_eq!(
            parse_response(Some(body), 200),
            Err(RoutingError::FailedToParseJson)
        );
    }
}
