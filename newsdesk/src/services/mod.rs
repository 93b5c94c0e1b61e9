mod article_service;
mod comment_service;
mod topic_service;
mod user_service;

pub use article_service::ArticleService;
pub use comment_service::CommentService;
pub use topic_service::TopicService;
pub use user_service::UserService;

use newsdesk_data::{DataError, Entity};

/// The entity-specific 404 for a lookup that matched nothing.
fn missing<E: Entity>() -> DataError {
    DataError::NotFound(E::missing_message().to_string())
}
