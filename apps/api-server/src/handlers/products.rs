//! Product handlers, gated on the store section.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use papyr_core::DomainError;
use papyr_core::domain::Product;

use super::{deleted, find_by_key};
use crate::config::Section;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/products
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Store)?;
    Ok(HttpResponse::Ok().json(state.products.find_all().await?))
}

/// GET /api/products/published
pub async fn published(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Store)?;
    Ok(HttpResponse::Ok().json(state.products.find_published().await?))
}

/// GET /api/products/{key}
pub async fn show(state: web::Data<AppState>, key: web::Path<String>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Store)?;

    let key = key.into_inner();
    let found = find_by_key::<Product, _>(state.products.as_ref(), &key).await?;
    let product = found.ok_or(DomainError::NotFoundByKey {
        entity_type: "product",
        key,
    })?;

    Ok(HttpResponse::Ok().json(product))
}

/// POST /api/products
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<Product>,
) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Store)?;

    let mut product = body.into_inner();
    product.id = None;
    validate(&product)?;

    let saved = state.products.save(product).await?;
    tracing::info!(id = ?saved.id, slug = %saved.slug, "Product created");
    Ok(HttpResponse::Ok().json(saved))
}

/// PUT /api/products/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<Product>,
) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Store)?;

    let mut product = body.into_inner();
    product.id = Some(id.into_inner());
    validate(&product)?;

    Ok(HttpResponse::Ok().json(state.products.save(product).await?))
}

/// DELETE /api/products/{id}
pub async fn delete(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.site.ensure(Section::Store)?;

    let id = id.into_inner();
    state.products.delete(id).await?;
    Ok(deleted("product", id))
}

fn validate(product: &Product) -> Result<(), DomainError> {
    if product.price < 0.0 {
        return Err(DomainError::Validation("price cannot be negative".to_string()));
    }
    if product.quantity < 0 {
        return Err(DomainError::Validation(
            "quantity cannot be negative".to_string(),
        ));
    }
    Ok(())
}
