use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use newsdesk_core::ApiResult;
use serde_json::{json, Value};

use crate::body::JsonBody;
use crate::models::NewComment;
use crate::path::PathParam;
use crate::services::CommentService;

pub async fn list_for_article(
    State(comments): State<CommentService>,
    PathParam(article_id): PathParam,
) -> ApiResult<Json<Value>> {
    let comments = comments.list_for_article(&article_id).await?;
    Ok(Json(json!({ "comments": comments })))
}

pub async fn create(
    State(comments): State<CommentService>,
    PathParam(article_id): PathParam,
    body: JsonBody,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let new_comment = NewComment {
        username: body.text("username")?.to_string(),
        body: body.text("body")?.to_string(),
    };
    let comment = comments.add(&article_id, new_comment).await?;
    Ok((StatusCode::CREATED, Json(json!({ "comment": comment }))))
}

pub async fn update_votes(
    State(comments): State<CommentService>,
    PathParam(comment_id): PathParam,
    body: JsonBody,
) -> ApiResult<Json<Value>> {
    let delta = body.integer("inc_votes")?;
    let comment = comments.add_votes(&comment_id, delta).await?;
    Ok(Json(json!({ "comment": comment })))
}

pub async fn remove(
    State(comments): State<CommentService>,
    PathParam(comment_id): PathParam,
) -> ApiResult<StatusCode> {
    comments.remove(&comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
