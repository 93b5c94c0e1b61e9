//! Read plans for the article collection.

use newsdesk_core::Failure;
use serde::Deserialize;

use crate::query::{QueryBuilder, SqlParam};
use crate::validate::{non_empty, SortColumn, SortOrder};

const ARTICLE_COLUMNS: &[&str] = &[
    "articles.article_id",
    "articles.title",
    "articles.topic",
    "articles.author",
    "articles.body",
    "articles.created_at",
    "articles.votes",
    "articles.article_img_url",
];

/// Articles left-joined with their comments, one row per article with the
/// live comment count attached as `comment_count`.
pub fn article_select() -> QueryBuilder {
    QueryBuilder::new("articles")
        .columns(ARTICLE_COLUMNS)
        .count_as("comments.comment_id", "comment_count")
        .left_join("comments", "comments.article_id", "articles.article_id")
        .group_by("articles.article_id")
}

/// The raw `GET /articles` query string. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleQuery {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// A validated, parameterized article listing.
#[derive(Debug, Clone)]
pub struct ArticlePlan {
    pub sql: String,
    pub params: Vec<SqlParam>,
    pub sort: SortColumn,
    pub order: SortOrder,
    pub topic: Option<String>,
}

impl ArticleQuery {
    pub fn topic(&self) -> Option<&str> {
        non_empty(self.topic.as_deref())
    }

    /// Validate the sort inputs and compose the statement.
    ///
    /// The topic is bound as a parameter; the sort expression comes from
    /// the [`SortColumn`] allow-list and never from the raw input.
    pub fn plan(&self) -> Result<ArticlePlan, Failure> {
        let sort = SortColumn::resolve(self.sort_by.as_deref())?;
        let order = SortOrder::resolve(self.order.as_deref())?;
        let topic = self.topic();

        let (sql, params) = article_select()
            .where_eq_opt("articles.topic", topic)
            .order_by(sort.expr(), order.is_ascending())
            .build_select()?;

        Ok(ArticlePlan {
            sql,
            params,
            sort,
            order,
            topic: topic.map(str::to_string),
        })
    }
}

/// Single-article lookup by id, with `comment_count`.
pub fn article_by_id(article_id: i64) -> Result<(String, Vec<SqlParam>), Failure> {
    Ok(article_select()
        .where_eq("articles.article_id", article_id)
        .build_select()?)
}
