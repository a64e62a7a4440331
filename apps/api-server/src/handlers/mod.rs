//! HTTP handlers and route configuration.

mod blogs;
mod events;
mod health;
mod orders;
mod posts;
mod products;
mod users;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use papyr_core::error::RepoError;
use papyr_core::ports::{BaseRepository, SlugLookup};
use papyr_shared::MessageResponse;

/// Configure all application routes.
///
/// Fixed segments such as `/published` are registered before the
/// `{key}` catch-all of the same scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/published", web::get().to(posts::published))
                    .route("/{key}", web::get().to(posts::show))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            .service(
                web::scope("/events")
                    .route("", web::get().to(events::list))
                    .route("", web::post().to(events::create))
                    .route("/published", web::get().to(events::published))
                    .route("/{key}", web::get().to(events::show))
                    .route("/{id}", web::put().to(events::update))
                    .route("/{id}", web::delete().to(events::delete)),
            )
            .service(
                web::scope("/blogs")
                    .route("", web::get().to(blogs::list))
                    .route("", web::post().to(blogs::create))
                    .route("/published", web::get().to(blogs::published))
                    .route("/{id}/comments", web::get().to(blogs::comments))
                    .route("/{id}/comments", web::post().to(blogs::add_comment))
                    .route("/{key}", web::get().to(blogs::show))
                    .route("/{id}", web::put().to(blogs::update))
                    .route("/{id}", web::delete().to(blogs::delete)),
            )
            .route("/comments/{id}", web::delete().to(blogs::delete_comment))
            .service(
                web::scope("/products")
                    .route("", web::get().to(products::list))
                    .route("", web::post().to(products::create))
                    .route("/published", web::get().to(products::published))
                    .route("/{key}", web::get().to(products::show))
                    .route("/{id}", web::put().to(products::update))
                    .route("/{id}", web::delete().to(products::delete)),
            )
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list))
                    .route("", web::post().to(users::create))
                    .route("/{id}/orders", web::get().to(users::orders))
                    .route("/{id}", web::get().to(users::show))
                    .route("/{id}", web::put().to(users::update))
                    .route("/{id}", web::delete().to(users::delete)),
            )
            .service(
                web::scope("/orders")
                    .route("", web::get().to(orders::list))
                    .route("", web::post().to(orders::create))
                    .route("/{id}", web::get().to(orders::show)),
            ),
    );
}

/// Resolve a path segment that is either a UUID or a slug.
pub(crate) async fn find_by_key<T, R>(repo: &R, key: &str) -> Result<Option<T>, RepoError>
where
    R: BaseRepository<T, Uuid> + SlugLookup<T> + ?Sized,
{
    match Uuid::parse_str(key) {
        Ok(id) => repo.find_by_id(id).await,
        Err(_) => repo.find_by_slug(key).await,
    }
}

pub(crate) fn deleted(entity: &str, id: Uuid) -> HttpResponse {
    tracing::info!(entity, %id, "Deleted");
    HttpResponse::Ok().json(MessageResponse::new(format!("{} {} deleted", entity, id)))
}

#[cfg(test)]
mod tests;
