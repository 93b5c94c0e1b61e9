use std::error::Error as StdError;

use newsdesk_core::AppError;

/// Errors that can occur in the data layer.
#[derive(Debug)]
pub enum DataError {
    /// A lookup by key matched nothing. Carries the client-facing message.
    NotFound(String),
    /// The store rejected a statement with a recognized error code.
    Store(StoreFailure),
    /// Any other driver failure (connection, decoding, pool timeout).
    Database(Box<dyn StdError + Send + Sync>),
}

impl DataError {
    /// Construct a `Database` variant from any error type.
    pub fn database(err: impl StdError + Send + Sync + 'static) -> Self {
        DataError::Database(Box::new(err))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NotFound(msg) => write!(f, "Not found: {msg}"),
            DataError::Store(failure) => write!(f, "Store error {}: {}", failure.code, failure.message),
            DataError::Database(err) => write!(f, "Database error: {err}"),
        }
    }
}

impl StdError for DataError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            DataError::Database(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// A store-raised failure: the normalized code plus the store's own message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFailure {
    pub code: StoreCode,
    pub message: String,
}

impl StoreFailure {
    pub fn new(code: StoreCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Store error codes the classifier understands.
///
/// Both SQLite extended result codes and PostgreSQL SQLSTATEs are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCode {
    InvalidTextRepresentation,
    ForeignKeyViolation,
    NumericOutOfRange,
    NotNullViolation,
    Other(String),
}

impl StoreCode {
    pub fn from_code(code: &str) -> Self {
        match code {
            // SQLITE_MISMATCH, SQLITE_CONSTRAINT_DATATYPE, invalid_text_representation
            "20" | "3091" | "22P02" => StoreCode::InvalidTextRepresentation,
            // SQLITE_CONSTRAINT_FOREIGNKEY, foreign_key_violation
            "787" | "23503" => StoreCode::ForeignKeyViolation,
            // numeric_value_out_of_range
            "22003" => StoreCode::NumericOutOfRange,
            // SQLITE_CONSTRAINT_NOTNULL, not_null_violation
            "1299" | "23502" => StoreCode::NotNullViolation,
            other => StoreCode::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for StoreCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreCode::InvalidTextRepresentation => f.write_str("invalid_text_representation"),
            StoreCode::ForeignKeyViolation => f.write_str("foreign_key_violation"),
            StoreCode::NumericOutOfRange => f.write_str("numeric_value_out_of_range"),
            StoreCode::NotNullViolation => f.write_str("not_null_violation"),
            StoreCode::Other(code) => write!(f, "code {code}"),
        }
    }
}

/// Normalization stage for data-layer failures.
///
/// Recognizes [`DataError::NotFound`] and store failures with a known code.
/// Unknown codes and plain driver errors pass to the next stage.
pub fn store_violation(err: &(dyn StdError + 'static)) -> Option<AppError> {
    match err.downcast_ref::<DataError>()? {
        DataError::NotFound(msg) => Some(AppError::NotFound(msg.clone())),
        DataError::Store(failure) => match &failure.code {
            StoreCode::InvalidTextRepresentation => Some(AppError::InvalidInput),
            StoreCode::ForeignKeyViolation => {
                Some(AppError::ForeignKeyViolation(failure.message.clone()))
            }
            StoreCode::NumericOutOfRange => Some(AppError::OutOfRange),
            StoreCode::NotNullViolation => Some(AppError::MalformedBody),
            StoreCode::Other(_) => None,
        },
        DataError::Database(_) => None,
    }
}
