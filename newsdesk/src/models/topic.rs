use newsdesk_data::Entity;
use serde::Serialize;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

impl Entity for Topic {
    fn table_name() -> &'static str {
        "topics"
    }

    fn id_column() -> &'static str {
        "slug"
    }

    fn columns() -> &'static [&'static str] {
        &["slug", "description"]
    }

    fn missing_message() -> &'static str {
        "Topic does not exist"
    }
}
