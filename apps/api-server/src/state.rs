//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::DbConn;

use papyr_core::ports::{
    BlogRepository, CommentRepository, EventRepository, OrderRepository, PasswordService,
    PostRepository, ProductRepository, TokenRepository, UserRepository,
};
use papyr_infra::{
    Argon2PasswordService, PostgresBlogRepository, PostgresCommentRepository,
    PostgresEventRepository, PostgresOrderRepository, PostgresPostRepository,
    PostgresProductRepository, PostgresTokenRepository, PostgresUserRepository,
};

use crate::config::SiteSettings;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub events: Arc<dyn EventRepository>,
    pub blogs: Arc<dyn BlogRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub users: Arc<dyn UserRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub tokens: Arc<dyn TokenRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub site: SiteSettings,
}

impl AppState {
    /// Wire every repository onto one connection pool.
    pub fn new(db: DbConn, site: SiteSettings) -> Self {
        tracing::info!(
            enable_blog = site.enable_blog,
            enable_events = site.enable_events,
            enable_store = site.enable_store,
            "Application state initialized"
        );

        Self {
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            events: Arc::new(PostgresEventRepository::new(db.clone())),
            blogs: Arc::new(PostgresBlogRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db.clone())),
            products: Arc::new(PostgresProductRepository::new(db.clone())),
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            orders: Arc::new(PostgresOrderRepository::new(db.clone())),
            tokens: Arc::new(PostgresTokenRepository::new(db)),
            passwords: Arc::new(Argon2PasswordService::new()),
            site,
        }
    }
}
