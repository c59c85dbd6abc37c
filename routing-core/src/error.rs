//! Errors reported while requesting or parsing a route.
//!
//! Every variant has a stable integer code so the taxonomy can cross
//! boundaries that cannot carry Rust enums; see [`RoutingError::code`] and
//! [`RoutingError::from_code`].

use thiserror::Error;

/// Failure to obtain a [`Route`](crate::Route) from the routing service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// Fewer than two points were supplied.
    #[error("at least two points are required to build a route")]
    TooFewPoints,
    /// The service answered without a body.
    #[error("no data was received from the routing service")]
    NoDataReceived,
    /// The body was not JSON, or lacked a usable path or reference system.
    #[error("failed to parse the routing response JSON")]
    FailedToParseJson,
    /// The bounding box was not an array of four numbers.
    #[error("the routing response contained an invalid bounding box")]
    InvalidBoundingBox,
    /// The path had no instructions array.
    #[error("the routing response contained no instructions")]
    MissingInstructions,
    /// The path had no coordinates array.
    #[error("the routing response contained no coordinates")]
    MissingCoordinates,
    /// The API key was rejected.
    #[error("the request was unauthorised; check the API key")]
    Unauthorised,
    /// The service rejected the request with the supplied message.
    #[error("the routing service rejected the request: {0}")]
    BadRequest(String),
    /// The service failed with the supplied message.
    #[error("the routing service reported an internal error: {0}")]
    ServerError(String),
    /// Any other response status.
    #[error("an unknown routing error occurred")]
    UnknownError,
}

impl RoutingError {
    /// Stable integer identifying the variant.
    ///
    /// # Examples
    /// ```
    /// use routing_core::RoutingError;
    ///
    /// assert_eq!(RoutingError::TooFewPoints.code(), 0);
    /// assert_eq!(RoutingError::ServerError("boom".into()).code(), 8);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::TooFewPoints => 0,
            Self::NoDataReceived => 1,
            Self::FailedToParseJson => 2,
            Self::InvalidBoundingBox => 3,
            Self::MissingInstructions => 4,
            Self::MissingCoordinates => 5,
            Self::Unauthorised => 6,
            Self::BadRequest(_) => 7,
            Self::ServerError(_) => 8,
            Self::UnknownError => 9,
        }
    }

    /// Server-supplied message, carried only by `BadRequest` and
    /// `ServerError`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::BadRequest(message) | Self::ServerError(message) => Some(message),
            _ => None,
        }
    }

    /// Rebuild an error from its code and optional message.
    ///
    /// Returns `None` for codes outside the taxonomy. A missing message on a
    /// message-carrying variant becomes the empty string.
    #[must_use]
    pub fn from_code(code: u8, message: Option<String>) -> Option<Self> {
        let error = match code {
            0 => Self::TooFewPoints,
            1 => Self::NoDataReceived,
            2 => Self::FailedToParseJson,
            3 => Self::InvalidBoundingBox,
            4 => Self::MissingInstructions,
            5 => Self::MissingCoordinates,
            6 => Self::Unauthorised,
            7 => Self::BadRequest(message.unwrap_or_default()),
            8 => Self::ServerError(message.unwrap_or_default()),
            9 => Self::UnknownError,
            _ => return None,
        };
        Some(error)
    }
}
