//! # newsdesk-data-sqlx
//!
//! SQLx/SQLite backend for the newsdesk data layer. It depends on
//! [`newsdesk-data`] for the store-neutral types and adds what is needed to
//! talk to a real database.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`connect`] | Open a pool with foreign keys enforced |
//! | [`query_as_with`] | Bind a [`SqlParam`](newsdesk_data::SqlParam) list to a `query_as` |
//! | [`ExistenceResolver`] | Confirm a referenced row exists, with an entity-specific 404 |
//! | [`describe_foreign_key_violation`] | Name the missing parent of a foreign-key failure |
//! | [`SqlxErrorExt`] | Convert `sqlx::Error` into `DataError` (`.into_data_error()`) |
//!
//! # Error bridging
//!
//! Due to Rust's orphan rules, `From<sqlx::Error> for DataError` can't be
//! implemented here. Use the [`SqlxErrorExt`] trait instead:
//!
//! ```ignore
//! use newsdesk_data_sqlx::SqlxErrorExt;
//!
//! let topics = sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics")
//!     .fetch_all(&pool)
//!     .await
//!     .map_err(SqlxErrorExt::into_data_error)?;
//! ```

pub mod bind;
pub mod error;
pub mod exists;
pub mod foreign_key;
pub mod pool;

pub use bind::query_as_with;
pub use error::{SqlxErrorExt, SqlxResult};
pub use exists::ExistenceResolver;
pub use foreign_key::{describe_foreign_key_violation, ForeignKeyRef};
pub use pool::connect;

