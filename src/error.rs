//! Error handling.

use axum::{
    http::header,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use thiserror::Error;
use tracing::{event, Level};

/// Actor showcase server error type
///
/// This type encapsulates the various errors that may occur.
/// Each variant may result in a different API error response.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// The catalog contains no records
    #[error("no actor data is available")]
    EmptyCatalog,

    /// Caller supplied an identifier that is not a positive integer
    #[error("invalid actor id '{id}'")]
    InvalidActorId { id: String },

    /// Caller supplied an empty country filter
    #[error("country must not be empty")]
    EmptyCountry,

    /// Two catalog records share an identifier
    #[error("duplicate actor id {id}")]
    DuplicateActorId { id: u32 },

    /// An actor record failed validation at construction
    #[error("actor record is not valid")]
    ActorValidation(#[from] validator::ValidationErrors),
}

impl IntoResponse for ShowcaseError {
    /// Convert from a `ShowcaseError` into an [axum::response::Response].
    fn into_response(self) -> Response {
        ErrorResponse::from(self).into_response()
    }
}

/// A response to send in error cases
///
/// Serialises to the same envelope shape as successful exchanges, with
/// `success` false and no `data` or `count` fields.
#[derive(Deserialize, Serialize)]
pub struct ErrorResponse {
    /// HTTP status of the response
    #[serde(skip)]
    status: StatusCode,

    /// Always false
    success: bool,

    /// Main error message
    message: String,

    /// Error class text
    error: String,
}

impl ErrorResponse {
    /// Return a new ErrorResponse
    ///
    /// # Arguments
    ///
    /// * `status`: HTTP status of the response
    /// * `message`: Human-readable description of the failure
    /// * `error`: Error class text
    fn new(status: StatusCode, message: String, error: &str) -> Self {
        ErrorResponse {
            status,
            success: false,
            message,
            error: error.to_string(),
        }
    }

    /// Return a 400 bad request ErrorResponse carrying the error's own text.
    fn bad_request<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        Self::new(StatusCode::BAD_REQUEST, error.to_string(), "invalid argument")
    }

    /// Return a 500 internal server error ErrorResponse with a generic,
    /// non-leaking message.
    fn internal_server_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "an internal error occurred".to_string(),
            "internal error",
        )
    }
}

impl From<ShowcaseError> for ErrorResponse {
    /// Convert from a `ShowcaseError` into an `ErrorResponse`.
    fn from(error: ShowcaseError) -> Self {
        let response = match &error {
            // Bad request
            ShowcaseError::InvalidActorId { id: _ }
            | ShowcaseError::EmptyCountry
            | ShowcaseError::ActorValidation(_) => Self::bad_request(&error),

            // Internal server error
            ShowcaseError::EmptyCatalog | ShowcaseError::DuplicateActorId { id: _ } => {
                Self::internal_server_error()
            }
        };

        // Log server errors.
        if response.status.is_server_error() {
            event!(Level::ERROR, "{}", error.to_string());
            let mut current = error.source();
            while let Some(source) = current {
                event!(Level::ERROR, "Caused by: {}", source.to_string());
                current = source.source();
            }
        }

        response
    }
}

impl IntoResponse for ErrorResponse {
    /// Convert from an `ErrorResponse` into an `axum::response::Response`.
    ///
    /// Renders the response as JSON.
    fn into_response(self) -> Response {
        let json_body = serde_json::to_string_pretty(&self);
        match json_body {
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialise error response: {}", err),
            )
                .into_response(),
            Ok(json_body) => (
                self.status,
                [(&header::CONTENT_TYPE, mime::APPLICATION_JSON.to_string())],
                json_body,
            )
                .into_response(),
        }
    }
}
