//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use papyr_core::domain::{Blog, Comment, Event, Order, Post, Product, Token, User};
use papyr_core::error::RepoError;
use papyr_core::ports::{
    BlogRepository, CommentRepository, EventRepository, OrderRepository, PostRepository,
    ProductRepository, TokenRepository, UserRepository,
};

use super::entity::{blog, comment, event, order, post, product, token, user};
use super::error::map_db_err;
use super::postgres_base::PostgresBaseRepository;

pub type PostgresPostRepository = PostgresBaseRepository<post::Entity>;
pub type PostgresEventRepository = PostgresBaseRepository<event::Entity>;
pub type PostgresBlogRepository = PostgresBaseRepository<blog::Entity>;
pub type PostgresCommentRepository = PostgresBaseRepository<comment::Entity>;
pub type PostgresProductRepository = PostgresBaseRepository<product::Entity>;
pub type PostgresUserRepository = PostgresBaseRepository<user::Entity>;
pub type PostgresOrderRepository = PostgresBaseRepository<order::Entity>;
pub type PostgresTokenRepository = PostgresBaseRepository<token::Entity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_published(&self) -> Result<Vec<Post>, RepoError> {
        self.fetch_all(
            post::Entity::find()
                .filter(post::Column::IsPublished.eq(true))
                .order_by_desc(post::Column::CreatedAt),
        )
        .await
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn find_published_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<Event>, RepoError> {
        tracing::debug!(%cutoff, "Finding published events");

        self.fetch_all(
            event::Entity::find()
                .filter(event::Column::IsPublished.eq(true))
                .filter(event::Column::Date.gte(cutoff))
                .order_by_desc(event::Column::Date),
        )
        .await
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_published(&self) -> Result<Vec<Blog>, RepoError> {
        self.fetch_all(
            blog::Entity::find()
                .filter(blog::Column::IsPublished.eq(true))
                .order_by_desc(blog::Column::PublishedAt),
        )
        .await
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_blog(&self, blog_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        self.fetch_all(
            comment::Entity::find()
                .filter(comment::Column::BlogId.eq(blog_id))
                .order_by_desc(comment::Column::CreatedAt),
        )
        .await
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_published(&self) -> Result<Vec<Product>, RepoError> {
        self.fetch_all(
            product::Entity::find()
                .filter(product::Column::IsPublished.eq(true))
                .order_by_desc(product::Column::CreatedAt),
        )
        .await
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = mask_email(email);
        tracing::debug!(user_email = %masked, "Finding user by email");

        self.fetch_one(user::Entity::find().filter(user::Column::Email.eq(email)))
            .await
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, RepoError> {
        self.fetch_all(
            order::Entity::find()
                .filter(order::Column::UserId.eq(user_id))
                .order_by_desc(order::Column::CreatedAt),
        )
        .await
    }
}

#[async_trait]
impl TokenRepository for PostgresTokenRepository {
    async fn find_by_value(&self, value: &str) -> Result<Option<Token>, RepoError> {
        self.fetch_one(token::Entity::find().filter(token::Column::Value.eq(value)))
            .await
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, RepoError> {
        let result = token::Entity::delete_many()
            .filter(token::Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(removed = result.rows_affected, "Expired tokens deleted");
        Ok(result.rows_affected)
    }
}

fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}@{domain}")
        }
        None => "***".to_string(),
    }
}
