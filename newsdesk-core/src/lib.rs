//! # newsdesk-core
//!
//! Runtime pieces shared by every newsdesk crate:
//!
//! | Item | Description |
//! |------|-------------|
//! | [`AppError`] | The closed set of client-facing failures, each with a fixed status and `{ "msg": ... }` body |
//! | [`Failure`] | Type-erased failure propagated with `?` from any layer up to the HTTP boundary |
//! | [`ErrorNormalizer`] | Ordered chain of classifier stages that turns a [`Failure`] into an [`AppError`] |
//! | [`NewsdeskConfig`] | YAML + `.env` + environment configuration |
//! | [`init_tracing`] | Global `tracing` subscriber bootstrap |

pub mod config;
pub mod error;
pub mod layers;
pub mod normalize;

pub use config::{ConfigError, ConfigValue, FromConfigValue, NewsdeskConfig};
pub use error::{error_response, AppError, Failure};
pub use layers::{catch_panic_layer, default_trace, init_tracing};
pub use normalize::{
    normalize_errors, route_not_found, shaped_application_error, with_error_normalizer,
    ErrorNormalizer,
};

/// Result alias used by services and handlers.
pub type ApiResult<T> = Result<T, Failure>;
