//! HTTP rendering of [`ResourceError`].
//!
//! The domain error stays transport agnostic; this module owns the status
//! table and the JSON body shape `{ error, message, details }`. Storage
//! causes are logged and replaced by a generic message before leaving the
//! process.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{ErrorCode, ResourceError};
use crate::inbound::http::schemas::ErrorCodeSchema;
use crate::middleware::TraceId;

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ResourceError>;

/// Message returned in place of any storage failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable failure tag.
    #[schema(value_type = ErrorCodeSchema, example = "not_found")]
    pub error: ErrorCode,
    /// Human-readable description.
    #[schema(example = "resource 999 not found")]
    pub message: String,
    /// Structured fields describing the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

impl From<&ResourceError> for ErrorBody {
    fn from(err: &ResourceError) -> Self {
        let message = match err {
            ResourceError::Storage { .. } => INTERNAL_ERROR_MESSAGE.to_owned(),
            other => other.to_string(),
        };
        Self {
            error: err.code(),
            message,
            details: err.details(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
        ErrorCode::DuplicateEmail => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ResourceError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if let ResourceError::Storage { cause } = self {
            match TraceId::current() {
                Some(trace_id) => error!(%trace_id, %cause, "storage failure"),
                None => error!(%cause, "storage failure"),
            }
        }
        HttpResponse::build(self.status_code()).json(ErrorBody::from(self))
    }
}
