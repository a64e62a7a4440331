use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Blog, Comment, Event, Order, Post, Product, Token, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `save` is an upsert driven by the model's id: an existing row is located
/// and overwritten, otherwise a new row is created. It returns the model as
/// read back from storage, relations included.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// All entities, newest first.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Lookup by URL slug.
#[async_trait]
pub trait SlugLookup<T>: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<T>, RepoError>;
}

#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> + SlugLookup<Post> {
    /// Published posts, newest first.
    async fn find_published(&self) -> Result<Vec<Post>, RepoError>;
}

#[async_trait]
pub trait EventRepository: BaseRepository<Event, Uuid> + SlugLookup<Event> {
    /// Published events dated on or after `cutoff`, latest date first.
    async fn find_published_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<Event>, RepoError>;
}

#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> + SlugLookup<Blog> {
    /// Published entries, most recently published first.
    async fn find_published(&self) -> Result<Vec<Blog>, RepoError>;
}

#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// Comments on a blog entry, newest first.
    async fn find_by_blog(&self, blog_id: Uuid) -> Result<Vec<Comment>, RepoError>;
}

#[async_trait]
pub trait ProductRepository: BaseRepository<Product, Uuid> + SlugLookup<Product> {
    /// Published products, newest first.
    async fn find_published(&self) -> Result<Vec<Product>, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

#[async_trait]
pub trait OrderRepository: BaseRepository<Order, Uuid> {
    /// Orders placed by a user, newest first.
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, RepoError>;
}

#[async_trait]
pub trait TokenRepository: BaseRepository<Token, Uuid> {
    async fn find_by_value(&self, value: &str) -> Result<Option<Token>, RepoError>;

    /// Remove tokens that expired at or before `now`; returns how many.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, RepoError>;
}
