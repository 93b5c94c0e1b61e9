use newsdesk_core::ApiResult;
use newsdesk_data::{article_by_id, parse_id, ArticleQuery};
use newsdesk_data_sqlx::{query_as_with, ExistenceResolver, SqlxErrorExt};
use sqlx::{SqliteConnection, SqlitePool};

use super::missing;
use crate::models::{Article, Topic};

#[derive(Clone)]
pub struct ArticleService {
    pool: SqlitePool,
    resolver: ExistenceResolver,
}

impl ArticleService {
    pub fn new(pool: SqlitePool) -> Self {
        let resolver = ExistenceResolver::new(pool.clone());
        Self { pool, resolver }
    }

    /// Filtered, sorted article listing.
    ///
    /// An empty result for a topic filter is checked against the topic
    /// itself: an unknown topic is a 404, a known topic with no articles is
    /// simply an empty list.
    pub async fn list(&self, query: &ArticleQuery) -> ApiResult<Vec<Article>> {
        let plan = query.plan()?;
        let articles = query_as_with::<Article>(&plan.sql, &plan.params)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;

        if articles.is_empty() {
            if let Some(topic) = plan.topic.as_deref() {
                self.resolver.ensure::<Topic>(topic).await?;
            }
        }

        tracing::debug!(
            count = articles.len(),
            sort_by = plan.sort.key(),
            topic = plan.topic.as_deref(),
            "listed articles"
        );
        Ok(articles)
    }

    pub async fn get(&self, token: &str) -> ApiResult<Article> {
        let article_id = parse_id(token)?;
        let mut conn = self.pool.acquire().await.map_err(SqlxErrorExt::into_data_error)?;
        fetch_article(&mut *conn, article_id).await
    }

    /// Apply `delta` to the article's votes in one statement and return the
    /// updated article.
    pub async fn add_votes(&self, token: &str, delta: i64) -> ApiResult<Article> {
        let article_id = parse_id(token)?;
        tracing::debug!(article_id, delta, "incrementing article votes");

        let mut tx = self.pool.begin().await.map_err(SqlxErrorExt::into_data_error)?;
        let updated: Option<i64> = sqlx::query_scalar(
            "UPDATE articles SET votes = votes + ? WHERE article_id = ? RETURNING article_id",
        )
        .bind(delta)
        .bind(article_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_data_error)?;

        if updated.is_none() {
            return Err(missing::<Article>().into());
        }

        let article = fetch_article(&mut *tx, article_id).await?;
        tx.commit().await.map_err(SqlxErrorExt::into_data_error)?;
        Ok(article)
    }
}

async fn fetch_article(conn: &mut SqliteConnection, article_id: i64) -> ApiResult<Article> {
    let (sql, params) = article_by_id(article_id)?;
    let article = query_as_with::<Article>(&sql, &params)
        .fetch_optional(conn)
        .await
        .map_err(SqlxErrorExt::into_data_error)?;
    Ok(article.ok_or_else(missing::<Article>)?)
}
