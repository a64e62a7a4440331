//! Post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use papyr_core::DomainError;
use papyr_core::domain::Post;

use super::{deleted, find_by_key};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.posts.find_all().await?))
}

/// GET /api/posts/published
pub async fn published(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.posts.find_published().await?))
}

/// GET /api/posts/{key}
pub async fn show(state: web::Data<AppState>, key: web::Path<String>) -> AppResult<HttpResponse> {
    let key = key.into_inner();
    let found = find_by_key::<Post, _>(state.posts.as_ref(), &key).await?;
    let post = found.ok_or(DomainError::NotFoundByKey {
        entity_type: "post",
        key,
    })?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create(state: web::Data<AppState>, body: web::Json<Post>) -> AppResult<HttpResponse> {
    let mut post = body.into_inner();
    post.id = None;

    let saved = state.posts.save(post).await?;
    tracing::info!(id = ?saved.id, slug = %saved.slug, "Post created");
    Ok(HttpResponse::Ok().json(saved))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<Post>,
) -> AppResult<HttpResponse> {
    let mut post = body.into_inner();
    post.id = Some(id.into_inner());

    Ok(HttpResponse::Ok().json(state.posts.save(post).await?))
}

/// DELETE /api/posts/{id}
pub async fn delete(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    state.posts.delete(id).await?;
    Ok(deleted("post", id))
}
