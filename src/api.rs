use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calc;

/// Route the calculation handler is mounted on.
pub const CALCULATE_PATH: &str = "/api/v1/calculate";

/// Request body: `{ "expression": "..." }`.
///
/// A body without an `expression` field decodes to the empty expression and
/// is rejected by the calculator rather than by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalculateRequest {
    /// The expression to evaluate.
    #[serde(default)]
    pub expression: String,
}

/// Response body for a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultResponse {
    /// The value of the expression.
    pub result: f64,
}

/// Response body for any failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable description of what went wrong.
    pub error: String,
}

/// Outcome class of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The expression was evaluated.
    Ok,
    /// The request was well formed but the expression was not.
    UnprocessableEntity,
    /// The request body could not be decoded.
    InternalServerError,
}

impl Status {
    /// The HTTP status code for this outcome.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::UnprocessableEntity => 422,
            Self::InternalServerError => 500,
        }
    }
}

/// A status paired with an encoded JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Outcome of the request.
    pub status: Status,
    /// JSON encoded [`ResultResponse`] or [`ErrorResponse`].
    pub body:   String,
}

/// Handles one calculation request body.
///
/// Decodes the body, evaluates the expression and encodes the answer. A body
/// that is not valid JSON for [`CalculateRequest`] yields
/// `Status::InternalServerError`; any calculation error yields
/// `Status::UnprocessableEntity` with the error message.
///
/// # Example
/// ```
/// use calcapi::api::{handle, Status};
///
/// let response = handle(r#"{"expression":"2+2"}"#);
/// assert_eq!(response.status, Status::Ok);
/// assert_eq!(response.body, r#"{"result":4.0}"#);
///
/// let response = handle(r#"{"expression":"2+5/"}"#);
/// assert_eq!(response.status.code(), 422);
/// ```
#[must_use]
pub fn handle(body: &str) -> Response {
    let request: CalculateRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "malformed request body");
            return error_response(Status::InternalServerError, e.to_string());
        },
    };

    match calc(&request.expression) {
        Ok(result) => encode(Status::Ok, &ResultResponse { result }),
        Err(e) => {
            info!(expression = %request.expression, error = %e, "rejected expression");
            error_response(Status::UnprocessableEntity, e.to_string())
        },
    }
}

fn error_response(status: Status, error: String) -> Response {
    encode(status, &ErrorResponse { error })
}

fn encode<T: Serialize>(status: Status, payload: &T) -> Response {
    match serde_json::to_string(payload) {
        Ok(body) => Response { status, body },
        Err(e) => {
            warn!(error = %e, "failed to encode response");
            Response { status: Status::InternalServerError,
                       body:   r#"{"error":"Internal Server Error"}"#.to_string(), }
        },
    }
}
