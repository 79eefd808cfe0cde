use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use crate::graph::error::{MatchError, RouteError};

/// Failures surfaced by the HTTP adapter. Responses carry only a status
/// code; the body stays empty.
#[derive(Debug)]
pub enum ServerError {
    /// A path segment could not be parsed as a `lat,lon` pair.
    InvalidPoint(String),
    Match(MatchError),
}

impl From<MatchError> for ServerError {
    fn from(value: MatchError) -> Self {
        Self::Match(value)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let code = match &self {
            ServerError::InvalidPoint(_)
            | ServerError::Match(MatchError::InsufficientPoints(_))
            | ServerError::Match(MatchError::Route(
                RouteError::NoPath { .. } | RouteError::UnknownNode(_) | RouteError::Cancelled,
            )) => StatusCode::BAD_REQUEST,
            ServerError::Match(MatchError::Detached(_))
            | ServerError::Match(MatchError::Route(RouteError::EmptyIndex)) => {
                error!("Internal inconsistency serving a match: {self:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Response::builder()
            .status(code)
            .body(Body::empty())
            .unwrap()
    }
}
