use axum::extract::State;
use axum::Json;
use newsdesk_core::ApiResult;
use serde_json::{json, Value};

use crate::path::PathParam;
use crate::services::UserService;

pub async fn list(State(users): State<UserService>) -> ApiResult<Json<Value>> {
    let users = users.list().await?;
    Ok(Json(json!({ "users": users })))
}

pub async fn get_by_username(
    State(users): State<UserService>,
    PathParam(username): PathParam,
) -> ApiResult<Json<Value>> {
    let user = users.get(&username).await?;
    Ok(Json(json!({ "user": user })))
}
