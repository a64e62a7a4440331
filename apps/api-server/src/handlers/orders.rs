//! Order handlers, gated on the store section.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use papyr_core::DomainError;
use papyr_core::domain::Order;

use crate::config::Section;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/orders
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Store)?;
    Ok(HttpResponse::Ok().json(state.orders.find_all().await?))
}

/// GET /api/orders/{id}
pub async fn show(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Store)?;

    let id = id.into_inner();
    let order = state
        .orders
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "order",
            id,
        })?;

    Ok(HttpResponse::Ok().json(order))
}

/// POST /api/orders
///
/// The products are stored as a snapshot; later catalogue edits do not
/// change placed orders.
pub async fn create(state: web::Data<AppState>, body: web::Json<Order>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Store)?;

    let mut order = body.into_inner();
    order.id = None;

    if order.products.is_empty() {
        return Err(DomainError::Validation("Order has no products".to_string()).into());
    }

    let saved = state.orders.save(order).await?;
    tracing::info!(id = ?saved.id, user_id = ?saved.user_id, total = saved.total, "Order placed");
    Ok(HttpResponse::Ok().json(saved))
}
