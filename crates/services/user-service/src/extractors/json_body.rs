//! Lenient JSON body extractor.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use common::AppError;

/// Message returned for any undecodable request body.
pub const INVALID_JSON: &str = "Invalid JSON";

/// JSON extractor that ignores the `Content-Type` header and reports every
/// rejection as a `400` with a structured body.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(reason = %e, "failed to read request body");
            AppError::bad_request(INVALID_JSON)
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(reason = %e, "failed to decode request body");
            AppError::bad_request(INVALID_JSON)
        })?;

        Ok(JsonBody(value))
    }
}
