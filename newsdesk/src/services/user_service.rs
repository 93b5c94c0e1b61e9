use newsdesk_core::ApiResult;
use newsdesk_data::{Entity, QueryBuilder};
use newsdesk_data_sqlx::{query_as_with, SqlxErrorExt};
use sqlx::SqlitePool;

use super::missing;
use crate::models::User;

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn select() -> QueryBuilder {
        QueryBuilder::new(User::table_name()).columns(User::columns())
    }

    pub async fn list(&self) -> ApiResult<Vec<User>> {
        let (sql, params) = Self::select().order_by("username", true).build_select()?;
        let users = query_as_with::<User>(&sql, &params)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        Ok(users)
    }

    pub async fn get(&self, username: &str) -> ApiResult<User> {
        let (sql, params) = Self::select().where_eq("username", username).build_select()?;
        let user = query_as_with::<User>(&sql, &params)
            .fetch_optional(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        Ok(user.ok_or_else(missing::<User>)?)
    }
}
