use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::services::{ArticleService, CommentService, TopicService, UserService};

/// Shared application state. Every service holds a handle to the same pool.
#[derive(Clone)]
pub struct AppState {
    pub article_service: ArticleService,
    pub comment_service: CommentService,
    pub topic_service: TopicService,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            article_service: ArticleService::new(pool.clone()),
            comment_service: CommentService::new(pool.clone()),
            topic_service: TopicService::new(pool.clone()),
            user_service: UserService::new(pool),
        }
    }
}

impl FromRef<AppState> for ArticleService {
    fn from_ref(state: &AppState) -> Self {
        state.article_service.clone()
    }
}

impl FromRef<AppState> for CommentService {
    fn from_ref(state: &AppState) -> Self {
        state.comment_service.clone()
    }
}

impl FromRef<AppState> for TopicService {
    fn from_ref(state: &AppState) -> Self {
        state.topic_service.clone()
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(state: &AppState) -> Self {
        state.user_service.clone()
    }
}
