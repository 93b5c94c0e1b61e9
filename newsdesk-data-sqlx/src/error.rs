use newsdesk_data::{DataError, StoreCode, StoreFailure};

/// Extension trait for converting `sqlx::Error` into `DataError`.
///
/// Due to Rust's orphan rules, we can't implement `From<sqlx::Error> for DataError`
/// in this crate. Use `.map_err(SqlxErrorExt::into_data_error)` instead.
///
/// Database errors that carry a code become [`DataError::Store`] with the
/// code normalized through [`StoreCode::from_code`]; everything else is kept
/// opaque as [`DataError::Database`].
pub trait SqlxErrorExt {
    fn into_data_error(self) -> DataError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_data_error(self) -> DataError {
        let store = match &self {
            sqlx::Error::RowNotFound => return DataError::NotFound("Row not found".into()),
            sqlx::Error::Database(db) => db
                .code()
                .map(|code| StoreFailure::new(StoreCode::from_code(&code), db.message())),
            _ => None,
        };
        match store {
            Some(failure) => DataError::Store(failure),
            None => DataError::database(self),
        }
    }
}

/// Convenience alias for data-layer results using `DataError`.
pub type SqlxResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;

    #[derive(Debug)]
    struct CodedError {
        code: &'static str,
        message: &'static str,
    }

    impl std::fmt::Display for CodedError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.message)
        }
    }

    impl StdError for CodedError {}

    impl sqlx::error::DatabaseError for CodedError {
        fn message(&self) -> &str {
            self.message
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }
    }

    fn database_error(code: &'static str, message: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(CodedError { code, message }))
    }

    #[test]
    fn coded_database_errors_become_store_failures() {
        let err = database_error("787", "FOREIGN KEY constraint failed").into_data_error();
        match err {
            DataError::Store(failure) => {
                assert_eq!(failure.code, StoreCode::ForeignKeyViolation);
                assert_eq!(failure.message, "FOREIGN KEY constraint failed");
            }
            other => panic!("expected store failure, got {other:?}"),
        }
    }

    #[test]
    fn postgres_codes_are_understood_too() {
        let err = database_error("22P02", "invalid input syntax for type integer").into_data_error();
        assert!(matches!(
            err,
            DataError::Store(StoreFailure { code: StoreCode::InvalidTextRepresentation, .. })
        ));
    }

    #[test]
    fn row_not_found_is_not_found() {
        assert!(matches!(
            sqlx::Error::RowNotFound.into_data_error(),
            DataError::NotFound(_)
        ));
    }

    #[test]
    fn other_driver_errors_stay_opaque() {
        assert!(matches!(
            sqlx::Error::PoolTimedOut.into_data_error(),
            DataError::Database(_)
        ));
    }
}
