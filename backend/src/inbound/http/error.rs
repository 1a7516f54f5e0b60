//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Generic message returned in place of internal failure detail.
const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Wire shape of every error response: a single `error` field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    #[schema(example = "min must be an integer")]
    pub error: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build the client-facing body, hiding internal failure detail.
///
/// Invalid requests echo their diagnostic message; anything internal is
/// replaced wholesale so store errors never reach the wire.
fn redact_if_internal(error: &Error) -> ErrorBody {
    let message = match error.code() {
        ErrorCode::InternalError => INTERNAL_ERROR_MESSAGE.to_owned(),
        ErrorCode::InvalidRequest => error.message().to_owned(),
    };
    ErrorBody { error: message }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(detail = %self.message(), "request failed with internal error");
        }
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // The message is kept for the server-side log; redaction strips it
        // from the wire body.
        Error::internal(err.to_string())
    }
}
