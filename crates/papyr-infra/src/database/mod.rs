//! Persistence: SeaORM schema, entity/model synchronization and repositories.

mod connections;
mod error;
mod mapper;
mod postgres_base;
pub mod postgres_repo;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use mapper::{ModelMapper, Sluggable};
pub use postgres_base::PostgresBaseRepository;
pub use postgres_repo::{
    PostgresBlogRepository, PostgresCommentRepository, PostgresEventRepository,
    PostgresOrderRepository, PostgresPostRepository, PostgresProductRepository,
    PostgresTokenRepository, PostgresUserRepository,
};

#[cfg(test)]
mod tests;
