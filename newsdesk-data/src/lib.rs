pub mod article_query;
pub mod entity;
pub mod error;
pub mod query;
pub mod validate;

pub use article_query::{article_by_id, article_select, ArticlePlan, ArticleQuery};
pub use entity::Entity;
pub use error::{store_violation, DataError, StoreCode, StoreFailure};
pub use query::{QueryBuilder, QueryError, SqlParam};
pub use validate::{parse_id, SortColumn, SortOrder};
