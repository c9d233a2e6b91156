//! Request body extraction.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// JSON body extractor that reports errors in the API's own shapes.
///
/// The body is parsed regardless of `Content-Type`:
///
/// - not JSON at all → `400 {"error": "Invalid JSON"}`
/// - JSON of the wrong shape → `400 {"errors": {"body": [reason]}}`
///
/// Missing fields are not a shape error; DTOs model them as `Option` and leave
/// them to validation.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        parse_json(&bytes).map(JsonBody)
    }
}

/// Parses a raw body, distinguishing malformed JSON from a shape mismatch.
pub fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|_| AppError::invalid_json())?;

    serde_json::from_value(value).map_err(|e| AppError::field("body", e.to_string()))
}
