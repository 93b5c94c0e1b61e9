use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use newsdesk_core::{ApiResult, AppError};
use newsdesk_data::ArticleQuery;
use serde_json::{json, Value};

use crate::body::JsonBody;
use crate::path::PathParam;
use crate::services::ArticleService;

pub async fn list(
    State(articles): State<ArticleService>,
    query: Result<Query<ArticleQuery>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(query) = query.map_err(|_| AppError::InvalidInput)?;
    let articles = articles.list(&query).await?;
    Ok(Json(json!({ "articles": articles })))
}

pub async fn get_by_id(
    State(articles): State<ArticleService>,
    PathParam(article_id): PathParam,
) -> ApiResult<Json<Value>> {
    let article = articles.get(&article_id).await?;
    Ok(Json(json!({ "article": article })))
}

pub async fn update_votes(
    State(articles): State<ArticleService>,
    PathParam(article_id): PathParam,
    body: JsonBody,
) -> ApiResult<Json<Value>> {
    let delta = body.integer("inc_votes")?;
    let article = articles.add_votes(&article_id, delta).await?;
    Ok(Json(json!({ "article": article })))
}
