use newsdesk_data::Entity;
use serde::Serialize;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl Entity for User {
    fn table_name() -> &'static str {
        "users"
    }

    fn id_column() -> &'static str {
        "username"
    }

    fn columns() -> &'static [&'static str] {
        &["username", "name", "avatar_url"]
    }

    fn missing_message() -> &'static str {
        "User does not exist"
    }
}
