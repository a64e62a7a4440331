//! SeaORM entities - one module per table.
//!
//! Each entity also implements [`ModelMapper`](super::ModelMapper) to convert
//! between its rows and the matching `papyr_core::domain` model.

pub mod blog;
pub mod cart_product;
pub mod comment;
pub mod event;
pub mod order;
pub mod post;
pub mod product;
pub mod token;
pub mod user;
