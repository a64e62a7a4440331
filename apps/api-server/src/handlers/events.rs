//! Event handlers. Every route answers 403 while the events section is off.

use actix_web::{HttpResponse, web};
use chrono::{Duration, Utc};
use uuid::Uuid;

use papyr_core::DomainError;
use papyr_core::domain::Event;

use super::{deleted, find_by_key};
use crate::config::Section;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// How far back `/published` reaches.
const PUBLISHED_LOOKBACK_DAYS: i64 = 2;

/// GET /api/events
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Events)?;
    Ok(HttpResponse::Ok().json(state.events.find_all().await?))
}

/// GET /api/events/published
///
/// Published events dated no earlier than two days ago, latest first.
pub async fn published(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Events)?;

    let cutoff = Utc::now() - Duration::days(PUBLISHED_LOOKBACK_DAYS);
    Ok(HttpResponse::Ok().json(state.events.find_published_since(cutoff).await?))
}

/// GET /api/events/{key}
pub async fn show(state: web::Data<AppState>, key: web::Path<String>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Events)?;

    let key = key.into_inner();
    let found = find_by_key::<Event, _>(state.events.as_ref(), &key).await?;
    let event = found.ok_or(DomainError::NotFoundByKey {
        entity_type: "event",
        key,
    })?;

    Ok(HttpResponse::Ok().json(event))
}

/// POST /api/events
pub async fn create(state: web::Data<AppState>, body: web::Json<Event>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Events)?;

    let mut event = body.into_inner();
    event.id = None;

    let saved = state.events.save(event).await?;
    tracing::info!(id = ?saved.id, date = %saved.date, "Event created");
    Ok(HttpResponse::Ok().json(saved))
}

/// PUT /api/events/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<Event>,
) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Events)?;

    let mut event = body.into_inner();
    event.id = Some(id.into_inner());

    Ok(HttpResponse::Ok().json(state.events.save(event).await?))
}

/// DELETE /api/events/{id}
pub async fn delete(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Events)?;

    let id = id.into_inner();
    state.events.delete(id).await?;
    Ok(deleted("event", id))
}
