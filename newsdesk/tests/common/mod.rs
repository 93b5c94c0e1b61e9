#![allow(dead_code)]

use newsdesk::AppState;
use newsdesk_test::TestApp;
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const TOPICS: &[(&str, &str)] = &[
    ("mitch", "The man, the Mitch, the legend"),
    ("cats", "Not dogs"),
    ("paper", "what books are made of"),
];

pub const USERS: &[(&str, &str)] = &[
    ("butter_bridge", "jonny"),
    ("icellusedkars", "sam"),
    ("rogersop", "paul"),
    ("lurker", "do_nothing"),
];

/// (title, topic, author, created_at, votes). Ids follow insertion order.
pub const ARTICLES: &[(&str, &str, &str, &str, i64)] = &[
    ("Living in the shadow of a great man", "mitch", "butter_bridge", "2020-07-09 20:11:00", 100),
    ("Sony Vaio; or, The Laptop", "mitch", "icellusedkars", "2020-10-16 05:03:00", 0),
    ("Eight pug gifs that remind me of mitch", "mitch", "icellusedkars", "2020-11-03 09:12:00", 0),
    ("Student SUES Mitch!", "mitch", "rogersop", "2020-05-06 01:14:00", 4),
    ("UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop", "2020-08-03 13:14:00", 0),
    ("A", "mitch", "icellusedkars", "2020-10-18 01:00:00", -2),
];

/// (body, article_id, author, votes, created_at)
pub const COMMENTS: &[(&str, i64, &str, i64, &str)] = &[
    ("Oh, I've got compassion running out of my nose, pal!", 1, "butter_bridge", 16, "2020-04-06 12:17:00"),
    ("The beautiful thing about treasure is that it exists.", 1, "butter_bridge", 14, "2020-10-31 03:03:00"),
    ("Replacing the quiet elegance of the dark suit and tie", 1, "icellusedkars", 100, "2020-03-01 01:13:00"),
    ("I hate streaming noses", 3, "icellusedkars", 0, "2020-11-03 21:00:00"),
    ("Lobster pot", 3, "icellusedkars", 0, "2020-05-15 20:19:00"),
    ("git push origin master", 5, "rogersop", 0, "2020-06-20 07:24:00"),
    ("Ambidextrous marsupial", 5, "icellusedkars", 0, "2020-09-19 23:10:00"),
];

/// A router over a fresh, migrated and seeded in-memory database.
pub async fn setup() -> (TestApp, SqlitePool) {
    let pool = newsdesk_data_sqlx::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    newsdesk::migrate(&pool).await.expect("migrations");
    seed(&pool).await;
    (TestApp::new(newsdesk::app(AppState::new(pool.clone()))), pool)
}

/// Like [`setup`], but backed by a database file so the pool can hold
/// `max_connections` live connections. Keep the `TempDir` alive for the
/// duration of the test.
pub async fn setup_on_disk(max_connections: u32) -> (TestApp, SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}", dir.path().join("newsdesk.db").display());
    let pool = newsdesk_data_sqlx::connect(&url, max_connections)
        .await
        .expect("file pool");
    newsdesk::migrate(&pool).await.expect("migrations");
    seed(&pool).await;
    (TestApp::new(newsdesk::app(AppState::new(pool.clone()))), pool, dir)
}

async fn seed(pool: &SqlitePool) {
    for &(slug, description) in TOPICS {
        sqlx::query("INSERT INTO topics (slug, description) VALUES (?, ?)")
            .bind(slug)
            .bind(description)
            .execute(pool)
            .await
            .unwrap();
    }
    for &(username, name) in USERS {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES (?, ?, ?)")
            .bind(username)
            .bind(name)
            .bind(format!("https://avatars.example.com/{username}.png"))
            .execute(pool)
            .await
            .unwrap();
    }
    for &(title, topic, author, created_at, votes) in ARTICLES {
        sqlx::query(
            "INSERT INTO articles (title, topic, author, body, created_at, votes) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(topic)
        .bind(author)
        .bind(format!("Body of {title}"))
        .bind(created_at)
        .bind(votes)
        .execute(pool)
        .await
        .unwrap();
    }
    for &(body, article_id, author, votes, created_at) in COMMENTS {
        sqlx::query(
            "INSERT INTO comments (body, article_id, author, votes, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(body)
        .bind(article_id)
        .bind(author)
        .bind(votes)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
    }
}

pub async fn comment_total(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await
        .unwrap()
}
