//! User handlers.
//!
//! Passwords arrive in plain text and are hashed here before the model
//! reaches the repository; responses never carry them.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use papyr_core::DomainError;
use papyr_core::domain::User;

use super::deleted;
use crate::config::Section;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.users.find_all().await?))
}

/// GET /api/users/{id}
pub async fn show(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "user",
            id,
        })?;

    Ok(HttpResponse::Ok().json(user))
}

/// POST /api/users
pub async fn create(state: web::Data<AppState>, body: web::Json<User>) -> AppResult<HttpResponse> {
    let mut user = body.into_inner();
    user.id = None;

    if user.email.is_empty() || !user.email.contains('@') {
        return Err(DomainError::Validation("Invalid email address".to_string()).into());
    }
    let password = user
        .password
        .take()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| DomainError::Validation("Password is required".to_string()))?;

    if state.users.find_by_email(&user.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    user.password = Some(state.passwords.hash(&password)?);

    let saved = state.users.save(user).await?;
    tracing::info!(id = ?saved.id, "User created");
    Ok(HttpResponse::Ok().json(saved))
}

/// PUT /api/users/{id}
///
/// The cart in the payload replaces the stored cart. Omitting `password`
/// keeps the current one; an id that matches no user creates one and then
/// needs a password like `create` does.
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<User>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    let mut user = body.into_inner();
    user.id = Some(id);

    user.password = match user.password.take().filter(|p| !p.is_empty()) {
        Some(plain) => Some(state.passwords.hash(&plain)?),
        None if state.users.find_by_id(id).await?.is_none() => {
            return Err(DomainError::Validation("Password is required".to_string()).into());
        }
        None => None,
    };

    Ok(HttpResponse::Ok().json(state.users.save(user).await?))
}

/// DELETE /api/users/{id}
pub async fn delete(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    state.users.delete(id).await?;
    Ok(deleted("user", id))
}

/// GET /api/users/{id}/orders
pub async fn orders(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Store)?;
    Ok(HttpResponse::Ok().json(state.orders.find_by_user(id.into_inner()).await?))
}
