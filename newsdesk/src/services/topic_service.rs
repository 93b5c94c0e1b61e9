use newsdesk_core::ApiResult;
use newsdesk_data::{Entity, QueryBuilder};
use newsdesk_data_sqlx::{query_as_with, SqlxErrorExt};
use sqlx::SqlitePool;

use crate::models::Topic;

#[derive(Clone)]
pub struct TopicService {
    pool: SqlitePool,
}

impl TopicService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> ApiResult<Vec<Topic>> {
        let (sql, params) = QueryBuilder::new(Topic::table_name())
            .columns(Topic::columns())
            .order_by("slug", true)
            .build_select()?;
        let topics = query_as_with::<Topic>(&sql, &params)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        Ok(topics)
    }
}
