use newsdesk_core::Failure;
use newsdesk_data::{parse_id, DataError, Entity, SqlParam};
use sqlx::SqlitePool;

use crate::bind::scalar_with;
use crate::error::{SqlxErrorExt, SqlxResult};

/// Confirms that a referenced row exists before dependent work proceeds.
///
/// Distinguishes three outcomes: the row exists, the reference is well formed
/// but matches nothing ([`DataError::NotFound`] with the entity's message), and
/// the reference is malformed (`InvalidInput` / `OutOfRange` from
/// [`parse_id`]).
#[derive(Clone)]
pub struct ExistenceResolver {
    pool: SqlitePool,
}

impl ExistenceResolver {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Parse a path token as an id of `E` and confirm the row exists.
    pub async fn resolve<E: Entity>(&self, token: &str) -> Result<i64, Failure> {
        let id = parse_id(token)?;
        self.ensure::<E>(id).await?;
        Ok(id)
    }

    /// Confirm a row of `E` has primary key `key`.
    pub async fn ensure<E: Entity>(&self, key: impl Into<SqlParam>) -> SqlxResult<()> {
        if row_exists(&self.pool, E::table_name(), E::id_column(), &key.into()).await? {
            Ok(())
        } else {
            Err(DataError::NotFound(E::missing_message().to_string()))
        }
    }
}

/// `SELECT EXISTS(...)` on a single-column key. Table and column are static
/// identifiers supplied by code, never by request input.
pub(crate) async fn row_exists(
    pool: &SqlitePool,
    table: &str,
    column: &str,
    key: &SqlParam,
) -> SqlxResult<bool> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE {column} = ?)");
    let found = scalar_with(&sql, key)
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_data_error)?;
    Ok(found != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_core::AppError;

    struct Widget;

    impl Entity for Widget {
        fn table_name() -> &'static str {
            "widgets"
        }
        fn id_column() -> &'static str {
            "widget_id"
        }
        fn columns() -> &'static [&'static str] {
            &["widget_id", "label"]
        }
        fn missing_message() -> &'static str {
            "Widget does not exist"
        }
    }

    async fn resolver() -> ExistenceResolver {
        let pool = crate::connect("sqlite::memory:", 1).await.unwrap();
        sqlx::query("CREATE TABLE widgets (widget_id INTEGER PRIMARY KEY, label TEXT NOT NULL)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO widgets (widget_id, label) VALUES (1, 'gear')")
            .execute(&pool)
            .await
            .unwrap();
        ExistenceResolver::new(pool)
    }

    #[tokio::test]
    async fn existing_row_resolves_to_id() {
        let resolver = resolver().await;
        assert_eq!(resolver.resolve::<Widget>("1").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn absent_row_is_entity_specific_not_found() {
        let resolver = resolver().await;
        let err = resolver.resolve::<Widget>("2").await.unwrap_err();
        match err.downcast_ref::<DataError>() {
            Some(DataError::NotFound(msg)) => assert_eq!(msg, "Widget does not exist"),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_reference_never_reaches_store() {
        let resolver = resolver().await;
        let err = resolver.resolve::<Widget>("gear").await.unwrap_err();
        assert_eq!(err.downcast_ref::<AppError>(), Some(&AppError::InvalidInput));

        let err = resolver
            .resolve::<Widget>("123456789012345678901234567890")
            .await
            .unwrap_err();
        assert_eq!(err.downcast_ref::<AppError>(), Some(&AppError::OutOfRange));
    }
}
