use axum::extract::State;
use axum::Json;
use newsdesk_core::ApiResult;
use serde_json::{json, Value};

use crate::services::TopicService;

pub async fn list(State(topics): State<TopicService>) -> ApiResult<Json<Value>> {
    let topics = topics.list().await?;
    Ok(Json(json!({ "topics": topics })))
}
