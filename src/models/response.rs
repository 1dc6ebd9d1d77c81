//! Uniform service response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Generic wrapper returned by every catalog operation: a payload, a
/// human-readable message, an HTTP status code and a success flag.
///
/// Constructed fresh per call and never mutated after return. `is_success`
/// is true only for 200-range outcomes with a populated payload; an empty
/// result set is reported as an unsuccessful envelope with status 204, not
/// as an error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub data: Option<T>,
    pub message: String,
    pub status_code: u16,
    pub is_success: bool,
}

impl<T> ServiceResponse<T> {
    /// Successful outcome with a populated payload
    pub fn ok(data: T, message: &str) -> Self {
        Self {
            data: Some(data),
            message: message.to_string(),
            status_code: StatusCode::OK.as_u16(),
            is_success: true,
        }
    }

    /// Zero matches: not an error, but reported as unsuccessful
    pub fn no_content(message: &str) -> Self {
        Self {
            data: None,
            message: message.to_string(),
            status_code: StatusCode::NO_CONTENT.as_u16(),
            is_success: false,
        }
    }

    /// Failed outcome with a fixed status and message
    pub fn failure(status: StatusCode, message: &str) -> Self {
        Self {
            data: None,
            message: message.to_string(),
            status_code: status.as_u16(),
            is_success: false,
        }
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
