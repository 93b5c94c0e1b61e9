//! # newsdesk
//!
//! Read/write HTTP API over articles, comments, users and topics.
//!
//! Every handler returns [`ApiResult`](newsdesk_core::ApiResult). Failures
//! travel up unhandled and are rewritten once, at the boundary, by the
//! [`ErrorNormalizer`] built in [`normalizer`].

pub mod body;
pub mod controllers;
pub mod models;
pub mod path;
pub mod services;
pub mod settings;
pub mod state;

use axum::routing::{get, patch};
use axum::Router;
use newsdesk_core::{
    catch_panic_layer, default_trace, route_not_found, shaped_application_error,
    with_error_normalizer, ErrorNormalizer,
};
use newsdesk_data::{store_violation, DataError};
use sqlx::SqlitePool;

use controllers::{article_controller, comment_controller, health, topic_controller, user_controller};

pub use settings::AppSettings;
pub use state::AppState;

/// The classification chain, in priority order.
pub fn normalizer() -> ErrorNormalizer {
    ErrorNormalizer::new()
        .stage("shaped", shaped_application_error)
        .stage("store", store_violation)
}

/// Assemble the full router: routes, error normalization, tracing and
/// panic recovery.
pub fn app(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/topics", get(topic_controller::list))
        .route("/users", get(user_controller::list))
        .route("/users/{username}", get(user_controller::get_by_username))
        .route("/articles", get(article_controller::list))
        .route(
            "/articles/{article_id}",
            get(article_controller::get_by_id).patch(article_controller::update_votes),
        )
        .route(
            "/articles/{article_id}/comments",
            get(comment_controller::list_for_article).post(comment_controller::create),
        )
        .route(
            "/comments/{comment_id}",
            patch(comment_controller::update_votes).delete(comment_controller::remove),
        )
        .fallback(route_not_found)
        .with_state(state);

    with_error_normalizer(routes, normalizer())
        .layer(default_trace())
        .layer(catch_panic_layer())
}

/// Apply pending schema migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), DataError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(DataError::database)
}
