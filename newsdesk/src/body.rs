//! Request body extraction.
//!
//! Bodies are read as a raw JSON object and fields are pulled out one at a
//! time so that a missing field (`MalformedBody`) can be told apart from a
//! field of the wrong type (`InvalidInput`). The stock `Json<T>` extractor
//! collapses both into a single rejection.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use newsdesk_core::{AppError, Failure};
use serde_json::{Map, Value};

/// A request body that parsed as a JSON object.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::MalformedBody)?;
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(fields)) => Ok(JsonBody(fields)),
            Ok(_) | Err(_) => Err(AppError::MalformedBody.into()),
        }
    }
}

impl JsonBody {
    fn present(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|value| !value.is_null())
    }

    /// A required integer field.
    pub fn integer(&self, field: &str) -> Result<i64, AppError> {
        let value = self.present(field).ok_or(AppError::MalformedBody)?;
        match value.as_i64() {
            Some(int) => Ok(int),
            None if value.is_u64() => Err(AppError::OutOfRange),
            None => Err(AppError::InvalidInput),
        }
    }

    /// A required, non-empty string field.
    pub fn text(&self, field: &str) -> Result<&str, AppError> {
        let value = self.present(field).ok_or(AppError::MalformedBody)?;
        match value.as_str() {
            Some("") => Err(AppError::MalformedBody),
            Some(text) => Ok(text),
            None => Err(AppError::InvalidInput),
        }
    }
}
