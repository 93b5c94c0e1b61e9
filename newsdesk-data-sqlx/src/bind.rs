use newsdesk_data::SqlParam;
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::{Database, FromRow};

type SqliteArgs<'q> = <Sqlite as Database>::Arguments<'q>;

/// Prepare a `query_as` with every parameter bound in order.
///
/// ```ignore
/// let plan = query.plan()?;
/// let rows = query_as_with::<Article>(&plan.sql, &plan.params)
///     .fetch_all(&pool)
///     .await
///     .map_err(SqlxErrorExt::into_data_error)?;
/// ```
pub fn query_as_with<'q, O>(sql: &'q str, params: &[SqlParam]) -> QueryAs<'q, Sqlite, O, SqliteArgs<'q>>
where
    O: for<'r> FromRow<'r, SqliteRow>,
{
    params
        .iter()
        .fold(sqlx::query_as(sql), |query, param| match param {
            SqlParam::Text(text) => query.bind(text.clone()),
            SqlParam::Int(int) => query.bind(*int),
        })
}

/// Prepare a single-value query with one bound parameter.
pub(crate) fn scalar_with<'q>(
    sql: &'q str,
    param: &SqlParam,
) -> QueryScalar<'q, Sqlite, i64, SqliteArgs<'q>> {
    let query = sqlx::query_scalar(sql);
    match param {
        SqlParam::Text(text) => query.bind(text.clone()),
        SqlParam::Int(int) => query.bind(*int),
    }
}
