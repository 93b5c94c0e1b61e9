pub mod article_controller;
pub mod comment_controller;
pub mod topic_controller;
pub mod user_controller;

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}
