mod app;
mod json;

pub use app::{TestApp, TestRequest, TestResponse};
pub use json::{resolve_path, tokenize_path, PathToken};
