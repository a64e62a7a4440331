//! Blog and comment handlers, gated on the blog section.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use papyr_core::DomainError;
use papyr_core::domain::{Blog, Comment};

use super::{deleted, find_by_key};
use crate::config::Section;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Blog)?;
    Ok(HttpResponse::Ok().json(state.blogs.find_all().await?))
}

/// GET /api/blogs/published
pub async fn published(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Blog)?;
    Ok(HttpResponse::Ok().json(state.blogs.find_published().await?))
}

/// GET /api/blogs/{key}
pub async fn show(state: web::Data<AppState>, key: web::Path<String>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Blog)?;

    let key = key.into_inner();
    let found = find_by_key::<Blog, _>(state.blogs.as_ref(), &key).await?;
    let blog = found.ok_or(DomainError::NotFoundByKey {
        entity_type: "blog",
        key,
    })?;

    Ok(HttpResponse::Ok().json(blog))
}

/// POST /api/blogs
pub async fn create(state: web::Data<AppState>, body: web::Json<Blog>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Blog)?;

    let mut blog = body.into_inner();
    blog.id = None;

    let saved = state.blogs.save(blog).await?;
    tracing::info!(id = ?saved.id, slug = %saved.slug, "Blog entry created");
    Ok(HttpResponse::Ok().json(saved))
}

/// PUT /api/blogs/{id}
///
/// Comments in the payload are ignored; they are managed through their own routes.
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<Blog>,
) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Blog)?;

    let mut blog = body.into_inner();
    blog.id = Some(id.into_inner());

    Ok(HttpResponse::Ok().json(state.blogs.save(blog).await?))
}

/// DELETE /api/blogs/{id}
pub async fn delete(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Blog)?;

    let id = id.into_inner();
    state.blogs.delete(id).await?;
    Ok(deleted("blog", id))
}

/// GET /api/blogs/{id}/comments
pub async fn comments(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Blog)?;
    Ok(HttpResponse::Ok().json(state.comments.find_by_blog(id.into_inner()).await?))
}

/// POST /api/blogs/{id}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<Comment>,
) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Blog)?;

    let mut comment = body.into_inner();
    if comment.content.trim().is_empty() {
        return Err(DomainError::Validation("comment content is empty".to_string()).into());
    }

    let blog_id = id.into_inner();
    if state.blogs.find_by_id(blog_id).await?.is_none() {
        return Err(DomainError::NotFound {
            entity_type: "blog",
            id: blog_id,
        }
        .into());
    }

    comment.id = None;
    comment.blog_id = blog_id;

    Ok(HttpResponse::Ok().json(state.comments.save(comment).await?))
}

/// DELETE /api/comments/{id}
pub async fn delete_comment(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Blog)?;

    let id = id.into_inner();
    state.comments.delete(id).await?;
    Ok(deleted("comment", id))
}
