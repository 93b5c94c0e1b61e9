//! Path segment extraction.
//!
//! The stock `Path<String>` rejection answers with its own plain-text 400
//! (for instance on a percent-encoded segment that is not UTF-8). Routing the
//! rejection through [`Failure`] keeps it inside the error normalizer.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use newsdesk_core::{AppError, Failure};

/// The single path parameter of a route, as raw text.
#[derive(Debug, Clone)]
pub struct PathParam(pub String);

impl<S> FromRequestParts<S> for PathParam
where
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "path segment rejected");
                AppError::InvalidInput
            })?;
        Ok(PathParam(segment))
    }
}
