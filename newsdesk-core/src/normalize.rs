//! Ordered failure classification.
//!
//! An [`ErrorNormalizer`] is an explicit list of named stages evaluated in
//! insertion order. Each stage inspects a failure and either recognizes it
//! (returning the [`AppError`] to answer with) or passes. The first stage
//! that recognizes a failure wins; a failure no stage recognizes becomes
//! [`AppError::Unclassified`] and is logged at `error` level.

use std::error::Error as StdError;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;

use crate::error::{AppError, Failure};

type ClassifyFn = dyn Fn(&(dyn StdError + 'static)) -> Option<AppError> + Send + Sync;

struct Stage {
    name: &'static str,
    classify: Box<ClassifyFn>,
}

/// Priority-ordered chain of failure classifiers.
///
/// ```ignore
/// let normalizer = ErrorNormalizer::new()
///     .stage("shaped", shaped_application_error)
///     .stage("store", store_violation);
/// ```
#[derive(Default)]
pub struct ErrorNormalizer {
    stages: Vec<Stage>,
}

impl ErrorNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage. Stages run in the order they were added.
    pub fn stage<F>(mut self, name: &'static str, classify: F) -> Self
    where
        F: Fn(&(dyn StdError + 'static)) -> Option<AppError> + Send + Sync + 'static,
    {
        self.stages.push(Stage {
            name,
            classify: Box::new(classify),
        });
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name).collect()
    }

    /// Run the chain and report which stage matched, if any.
    pub fn classify(&self, err: &(dyn StdError + 'static)) -> Option<(&'static str, AppError)> {
        self.stages
            .iter()
            .find_map(|stage| (stage.classify)(err).map(|mapped| (stage.name, mapped)))
    }

    /// Map a failure to the error the client sees.
    pub fn normalize(&self, failure: &Failure) -> AppError {
        match self.classify(failure.as_error()) {
            Some((stage, mapped)) => {
                tracing::debug!(stage, status = %mapped.status(), error = %failure, "failure classified");
                mapped
            }
            None => {
                tracing::error!(error = ?failure, "unclassified failure");
                AppError::Unclassified
            }
        }
    }
}

/// First stage: failures that already are an [`AppError`] pass through verbatim.
pub fn shaped_application_error(err: &(dyn StdError + 'static)) -> Option<AppError> {
    err.downcast_ref::<AppError>().cloned()
}

/// Middleware rewriting any response that carries a parked [`Failure`].
pub async fn normalize_errors(
    State(normalizer): State<Arc<ErrorNormalizer>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    match response.extensions_mut().remove::<Failure>() {
        Some(failure) => normalizer.normalize(&failure).into_response(),
        None => response,
    }
}

/// Install [`normalize_errors`] on a router.
pub fn with_error_normalizer<S>(router: Router<S>, normalizer: ErrorNormalizer) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(
        Arc::new(normalizer),
        normalize_errors,
    ))
}

/// Fallback handler for unmatched routes.
pub async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Opaque;

    impl std::fmt::Display for Opaque {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("opaque")
        }
    }

    impl StdError for Opaque {}

    fn opaque_as_bad_input(err: &(dyn StdError + 'static)) -> Option<AppError> {
        err.downcast_ref::<Opaque>().map(|_| AppError::InvalidInput)
    }

    #[test]
    fn first_matching_stage_wins() {
        let normalizer = ErrorNormalizer::new()
            .stage("always-range", |_| Some(AppError::OutOfRange))
            .stage("shaped", shaped_application_error);

        let (stage, mapped) = normalizer.classify(&AppError::MalformedBody).unwrap();
        assert_eq!(stage, "always-range");
        assert_eq!(mapped, AppError::OutOfRange);
    }

    #[test]
    fn falls_through_to_later_stage() {
        let normalizer = ErrorNormalizer::new()
            .stage("shaped", shaped_application_error)
            .stage("opaque", opaque_as_bad_input);

        let (stage, mapped) = normalizer.classify(&Opaque).unwrap();
        assert_eq!(stage, "opaque");
        assert_eq!(mapped, AppError::InvalidInput);
        assert_eq!(normalizer.stage_names(), vec!["shaped", "opaque"]);
    }

    #[test]
    fn unrecognized_failure_is_unclassified() {
        let normalizer = ErrorNormalizer::new().stage("shaped", shaped_application_error);
        let failure = Failure::from(Opaque);
        assert_eq!(normalizer.normalize(&failure), AppError::Unclassified);
    }
}
