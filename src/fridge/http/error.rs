//! Mapping from [`FridgeError`] to HTTP responses.
//!
//! JSON routes answer with `{"message": ...}`, page routes with plain text. Anything
//! that is not the caller's fault is logged and redacted to a generic message.

use crate::error::FridgeError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use tracing::{error, warn};

const INTERNAL_MESSAGE: &str = "Internal server error";

fn status_for(error: &FridgeError) -> StatusCode {
    match error {
        FridgeError::Validation(_) | FridgeError::Serialization(_) => StatusCode::BAD_REQUEST,
        FridgeError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(error: &FridgeError) -> String {
    let status = status_for(error);
    if status.is_server_error() {
        error!(error = %error, "request failed");
        INTERNAL_MESSAGE.to_string()
    } else {
        warn!(error = %error, status = status.as_u16(), "request rejected");
        error.to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Error returned by the JSON API.
#[derive(Debug)]
pub struct ApiError(pub FridgeError);

impl From<FridgeError> for ApiError {
    fn from(value: FridgeError) -> Self {
        Self(value)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(MessageBody {
            message: public_message(&self.0),
        })
    }
}

/// Error returned by the HTML form routes.
#[derive(Debug)]
pub struct PageError(pub FridgeError);

impl From<FridgeError> for PageError {
    fn from(value: FridgeError) -> Self {
        Self(value)
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(public_message(&self.0))
    }
}
