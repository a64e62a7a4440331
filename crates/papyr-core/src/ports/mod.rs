//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;

pub use auth::{AuthError, PasswordService};
pub use repository::{
    BaseRepository, BlogRepository, CommentRepository, EventRepository, OrderRepository,
    PostRepository, ProductRepository, SlugLookup, TokenRepository, UserRepository,
};
