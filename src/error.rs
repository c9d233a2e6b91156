//! Application error taxonomy and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. The [`IntoResponse`] impl is the
//! single place where error kinds are translated into status codes and JSON
//! bodies:
//!
//! | Variant              | Status | Body                              |
//! |----------------------|--------|-----------------------------------|
//! | `BadRequest`         | 400    | `{"error": "..."}`                |
//! | `Validation`         | 400    | `{"errors": {"field": ["..."]}}`  |
//! | `InvalidCredentials` | 401    | `{"error": "Invalid credentials"}`|
//! | `Unauthorized`       | 401    | `{"error": "..."}`                |
//! | `NotFound`           | 404    | `{"error": "..."}`                |
//! | `Conflict`           | 409    | `{"error": "..."}`                |
//! | `Internal`           | 500    | `{"error": "Internal server error"}` |

use std::collections::BTreeMap;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::ValidationErrors;

use crate::application::services::token_service::TokenError;

/// Per-field validation messages, ordered by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Message returned for any field that is required but absent.
pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be parsed at all.
    #[error("{message}")]
    BadRequest { message: String },

    /// The body parsed, but one or more fields are semantically invalid.
    #[error("Validation failed: {errors:?}")]
    Validation { errors: FieldErrors },

    /// Unknown username or wrong password. Both cases share this variant.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Conflict {
        message: String,
        constraint: Option<String>,
    },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn invalid_json() -> Self {
        Self::bad_request("Invalid JSON")
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }

    /// Builds a validation error carrying a single message for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        Self::Validation { errors }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>, constraint: Option<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            constraint,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a unique violation on the named constraint.
    pub fn is_conflict_on(&self, name: &str) -> bool {
        matches!(self, Self::Conflict { constraint: Some(c), .. } if c == name)
    }

    /// HTTP status for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthorized { .. } => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Validation { errors } => json!({ "errors": errors }),
            AppError::Internal { message } => {
                tracing::error!(%message, "Internal error");
                json!({ "error": "Internal server error" })
            }
            AppError::InvalidCredentials => json!({ "error": "Invalid credentials" }),
            AppError::BadRequest { message }
            | AppError::Unauthorized { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message, .. } => json!({ "error": message }),
        };

        let mut response = (status, Json(body)).into_response();

        // RFC 6750
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                db.constraint().map(str::to_string),
            );
        }

        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        AppError::Validation { errors }
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => AppError::unauthorized("Token expired"),
            TokenError::Invalid => AppError::unauthorized("Invalid token"),
            TokenError::TypeMismatch { .. } => AppError::unauthorized("Invalid token type"),
            TokenError::Encoding(reason) => {
                AppError::internal(format!("Token encoding failed: {reason}"))
            }
        }
    }
}
