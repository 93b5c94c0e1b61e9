use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{SqlxErrorExt, SqlxResult};

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a pool with foreign keys enforced on every connection.
///
/// In-memory databases live only as long as their connection, so they get
/// exactly one connection that never idles out.
pub async fn connect(url: &str, max_connections: u32) -> SqlxResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(SqlxErrorExt::into_data_error)?
        .foreign_keys(true)
        .create_if_missing(true);

    let pool_options = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    tracing::debug!(url, in_memory = is_in_memory(url), "opening sqlite pool");
    pool_options
        .connect_with(options)
        .await
        .map_err(SqlxErrorExt::into_data_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:news?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://newsdesk.db"));
    }

    #[tokio::test]
    async fn in_memory_pool_enforces_foreign_keys() {
        let pool = connect("sqlite::memory:", 8).await.unwrap();
        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
