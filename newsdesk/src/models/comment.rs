use chrono::NaiveDateTime;
use newsdesk_data::Entity;
use serde::Serialize;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i64,
    pub body: String,
    pub article_id: i64,
    pub author: String,
    pub votes: i64,
    pub created_at: NaiveDateTime,
}

impl Entity for Comment {
    fn table_name() -> &'static str {
        "comments"
    }

    fn id_column() -> &'static str {
        "comment_id"
    }

    fn columns() -> &'static [&'static str] {
        &["comment_id", "body", "article_id", "author", "votes", "created_at"]
    }

    fn missing_message() -> &'static str {
        "Comment does not exist"
    }
}

/// Validated payload for a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub username: String,
    pub body: String,
}
