use newsdesk_data::{DataError, SqlParam, StoreCode, StoreFailure};
use sqlx::SqlitePool;

use crate::exists::row_exists;

/// One parent reference carried by a row about to be written.
#[derive(Debug, Clone)]
pub struct ForeignKeyRef {
    pub column: &'static str,
    pub value: SqlParam,
    pub parent_table: &'static str,
    pub parent_column: &'static str,
}

impl ForeignKeyRef {
    pub fn new(
        column: &'static str,
        value: impl Into<SqlParam>,
        parent_table: &'static str,
        parent_column: &'static str,
    ) -> Self {
        Self {
            column,
            value: value.into(),
            parent_table,
            parent_column,
        }
    }

    fn describe(&self) -> String {
        format!(
            "Key ({})=({}) is not present in table \"{}\".",
            self.column, self.value, self.parent_table
        )
    }
}

/// Give a foreign-key failure a message that names the offending reference.
///
/// SQLite reports only `FOREIGN KEY constraint failed`. The declared
/// references are probed in order and the first one with no parent row
/// becomes the message. Anything other than a foreign-key failure is
/// returned untouched, as is a violation none of `refs` explains.
pub async fn describe_foreign_key_violation(
    pool: &SqlitePool,
    err: DataError,
    refs: &[ForeignKeyRef],
) -> DataError {
    let failure = match err {
        DataError::Store(failure) if failure.code == StoreCode::ForeignKeyViolation => failure,
        other => return other,
    };

    for reference in refs {
        match row_exists(pool, reference.parent_table, reference.parent_column, &reference.value)
            .await
        {
            Ok(true) => continue,
            Ok(false) => {
                tracing::debug!(
                    column = reference.column,
                    table = reference.parent_table,
                    "foreign key reference has no parent row"
                );
                return DataError::Store(StoreFailure::new(
                    StoreCode::ForeignKeyViolation,
                    reference.describe(),
                ));
            }
            Err(probe) => {
                tracing::warn!(error = %probe, "foreign key probe failed");
                break;
            }
        }
    }
    DataError::Store(failure)
}
