//! # Papyr Infrastructure
//!
//! Concrete implementations of the ports defined in `papyr-core`:
//! the SeaORM schema, the entity/model synchronization layer built on it,
//! and credential hashing.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - Database layer only
//! - `auth` - Argon2 password hashing

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

pub use database::{
    DatabaseConfig, ModelMapper, PostgresBaseRepository, PostgresBlogRepository,
    PostgresCommentRepository, PostgresEventRepository, PostgresOrderRepository,
    PostgresPostRepository, PostgresProductRepository, PostgresTokenRepository,
    PostgresUserRepository,
};

#[cfg(feature = "auth")]
pub use auth::Argon2PasswordService;
