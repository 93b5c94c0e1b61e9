use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Helper to create a JSON error response with the standard `{ "msg": message }` body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({ "msg": message.into() });
    (status, Json(body)).into_response()
}

/// Client-facing failure taxonomy.
///
/// Every variant maps to exactly one status code and message. Values of this
/// type are "shaped": they already carry everything the client will see and
/// are emitted verbatim by the first normalization stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Malformed identifier or wrong-typed value.
    InvalidInput,
    /// Sort key outside the allow-list.
    InvalidSortColumn,
    /// Order token other than `asc` / `desc`.
    InvalidSortOrder,
    /// Required body field missing, or no usable body at all.
    MalformedBody,
    /// Well-formed reference to an absent entity.
    NotFound(String),
    /// Numeric identifier that does not fit the store's integer type.
    OutOfRange,
    /// Referenced parent absent at write time. Carries the store's description.
    ForeignKeyViolation(String),
    /// Anything no classifier recognized.
    Unclassified,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput
            | AppError::InvalidSortColumn
            | AppError::InvalidSortOrder
            | AppError::MalformedBody
            | AppError::OutOfRange => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::ForeignKeyViolation(_) => StatusCode::NOT_FOUND,
            AppError::Unclassified => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::InvalidInput => "Invalid input",
            AppError::InvalidSortColumn => "Invalid sort by query",
            AppError::InvalidSortOrder => "Invalid order query",
            AppError::MalformedBody => "Malformed body/missing required fields",
            AppError::NotFound(msg) => msg,
            AppError::OutOfRange => "Value out of range",
            AppError::ForeignKeyViolation(msg) => msg,
            AppError::Unclassified => "Internal server error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl StdError for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.message())
    }
}

/// A failure raised anywhere below the HTTP boundary.
///
/// Wraps any error type without inspecting it. Intermediate layers only
/// propagate it with `?`; classification happens once, in the
/// [`ErrorNormalizer`](crate::ErrorNormalizer).
///
/// As a handler return value it answers with a placeholder 500 and parks
/// itself in the response extensions, where
/// [`normalize_errors`](crate::normalize_errors) picks it up.
#[derive(Clone)]
pub struct Failure(Arc<dyn StdError + Send + Sync + 'static>);

impl Failure {
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Failure(Arc::new(err))
    }

    /// Borrow the wrapped error as a plain `dyn Error`.
    pub fn as_error(&self) -> &(dyn StdError + 'static) {
        &*self.0
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.as_error().downcast_ref::<E>()
    }

    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.downcast_ref::<E>().is_some()
    }
}

impl<E> From<E> for Failure
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Failure::new(err)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.0).finish()
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_taxonomy() {
        assert_eq!(AppError::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidSortColumn.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MalformedBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::OutOfRange.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::not_found("Article ID does not exist").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ForeignKeyViolation("fk".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Unclassified.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn failure_downcasts_to_wrapped_error() {
        let failure = Failure::from(AppError::InvalidSortColumn);
        assert!(failure.is::<AppError>());
        assert_eq!(
            failure.downcast_ref::<AppError>(),
            Some(&AppError::InvalidSortColumn)
        );
        assert!(!failure.is::<std::io::Error>());
    }

    #[test]
    fn failure_parks_itself_in_extensions() {
        let response = Failure::from(AppError::MalformedBody).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.extensions().get::<Failure>().is_some());
    }
}
