//! Domain models - the API-facing shape of every persisted object.
//!
//! A model carries `id: None` until it has been persisted; timestamps are
//! filled in by the persistence layer.

mod blog;
mod comment;
mod event;
mod order;
mod post;
mod product;
mod token;
mod user;

pub use blog::Blog;
pub use comment::Comment;
pub use event::Event;
pub use order::{Order, OrderStatus};
pub use post::Post;
pub use product::Product;
pub use token::Token;
pub use user::User;
