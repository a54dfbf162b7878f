use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::de::{DeserializeOwned, Error as _};

use super::error::ApiError;
use crate::models::{Post, PostPatch};
use crate::store::{PostStore, StoreError};

/// Parse the `{id}` path segment as a position, then check it against the
/// current length. Both failures short-circuit before the body is decoded.
fn resolve_index(store: &PostStore, raw: &str) -> Result<usize, ApiError> {
    let index: usize = raw
        .parse()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))?;
    let len = store.len();
    if index >= len {
        return Err(StoreError::NotFound { index, len }.into());
    }
    Ok(index)
}

/// Bodies are decoded from raw bytes so the request `Content-Type` is not
/// required to be `application/json`. Going through `Value` first keeps the
/// last occurrence of a repeated key instead of rejecting the document.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom("expected a JSON object").into());
    }
    Ok(serde_json::from_value(value)?)
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Posts
// ============================================================

pub async fn list_posts(State(store): State<PostStore>) -> Json<Vec<Post>> {
    Json(store.all())
}

pub async fn create_post(
    State(store): State<PostStore>,
    body: Bytes,
) -> Result<Json<Vec<Post>>, ApiError> {
    let post: Post = decode(&body)?;
    let posts = store.append(post);
    tracing::debug!("Created post at index {}", posts.len() - 1);
    Ok(Json(posts))
}

pub async fn get_post(
    State(store): State<PostStore>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let index = resolve_index(&store, &id)?;
    Ok(Json(store.get(index)?))
}

pub async fn replace_post(
    State(store): State<PostStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Post>, ApiError> {
    let index = resolve_index(&store, &id)?;
    let post: Post = decode(&body)?;
    let post = store.replace(index, post)?;
    tracing::debug!("Replaced post at index {}", index);
    Ok(Json(post))
}

pub async fn patch_post(
    State(store): State<PostStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Post>, ApiError> {
    let index = resolve_index(&store, &id)?;
    let patch: PostPatch = decode(&body)?;
    let post = store.patch(index, patch)?;
    tracing::debug!("Patched post at index {}", index);
    Ok(Json(post))
}

pub async fn delete_post(
    State(store): State<PostStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let index = resolve_index(&store, &id)?;
    store.remove(index)?;
    tracing::debug!("Deleted post at index {}", index);
    Ok(StatusCode::OK)
}
