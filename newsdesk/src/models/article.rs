use chrono::NaiveDateTime;
use newsdesk_data::Entity;
use serde::Serialize;

/// An article row with its live comment count.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl Entity for Article {
    fn table_name() -> &'static str {
        "articles"
    }

    fn id_column() -> &'static str {
        "article_id"
    }

    fn columns() -> &'static [&'static str] {
        &[
            "article_id",
            "title",
            "topic",
            "author",
            "body",
            "created_at",
            "votes",
            "article_img_url",
        ]
    }

    fn missing_message() -> &'static str {
        "Article ID does not exist"
    }
}
