use newsdesk_core::ApiResult;
use newsdesk_data::{parse_id, Entity, QueryBuilder};
use newsdesk_data_sqlx::{
    describe_foreign_key_violation, query_as_with, ExistenceResolver, ForeignKeyRef, SqlxErrorExt,
};
use sqlx::SqlitePool;

use super::missing;
use crate::models::{Article, Comment, NewComment};

const RETURNING: &str = "RETURNING comment_id, body, article_id, author, votes, created_at";

#[derive(Clone)]
pub struct CommentService {
    pool: SqlitePool,
    resolver: ExistenceResolver,
}

impl CommentService {
    pub fn new(pool: SqlitePool) -> Self {
        let resolver = ExistenceResolver::new(pool.clone());
        Self { pool, resolver }
    }

    /// Comments on an article, newest first. The article must exist; an
    /// existing article without comments yields an empty list.
    pub async fn list_for_article(&self, token: &str) -> ApiResult<Vec<Comment>> {
        let article_id = self.resolver.resolve::<Article>(token).await?;
        let (sql, params) = QueryBuilder::new(Comment::table_name())
            .columns(Comment::columns())
            .where_eq("article_id", article_id)
            .order_by("created_at", false)
            .order_by("comment_id", false)
            .build_select()?;

        let comments = query_as_with::<Comment>(&sql, &params)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        Ok(comments)
    }

    /// Insert a comment. Unknown articles or authors surface as the store's
    /// foreign-key violation, naming the offending column.
    pub async fn add(&self, token: &str, comment: NewComment) -> ApiResult<Comment> {
        let article_id = parse_id(token)?;
        let sql = format!("INSERT INTO comments (body, article_id, author) VALUES (?, ?, ?) {RETURNING}");

        let inserted = sqlx::query_as::<_, Comment>(&sql)
            .bind(&comment.body)
            .bind(article_id)
            .bind(&comment.username)
            .fetch_one(&self.pool)
            .await;

        match inserted {
            Ok(created) => {
                tracing::debug!(comment_id = created.comment_id, article_id, "comment created");
                Ok(created)
            }
            Err(err) => {
                let refs = [
                    ForeignKeyRef::new("article_id", article_id, "articles", "article_id"),
                    ForeignKeyRef::new("author", comment.username.as_str(), "users", "username"),
                ];
                let err = describe_foreign_key_violation(&self.pool, err.into_data_error(), &refs).await;
                Err(err.into())
            }
        }
    }

    /// Hard delete. Deleting an absent comment is a 404.
    pub async fn remove(&self, token: &str) -> ApiResult<()> {
        let comment_id = parse_id(token)?;
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = ?")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;

        if result.rows_affected() == 0 {
            return Err(missing::<Comment>().into());
        }
        tracing::debug!(comment_id, "comment deleted");
        Ok(())
    }

    pub async fn add_votes(&self, token: &str, delta: i64) -> ApiResult<Comment> {
        let comment_id = parse_id(token)?;
        tracing::debug!(comment_id, delta, "incrementing comment votes");

        let sql = format!("UPDATE comments SET votes = votes + ? WHERE comment_id = ? {RETURNING}");
        let updated = sqlx::query_as::<_, Comment>(&sql)
            .bind(delta)
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        Ok(updated.ok_or_else(missing::<Comment>)?)
    }
}
