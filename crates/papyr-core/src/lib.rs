//! # Papyr Core
//!
//! The domain layer of the Papyr backend: the API-facing models, the
//! tag and cart rules they obey, and the ports infrastructure must implement.
//! This crate has zero infrastructure dependencies.

pub mod cart;
pub mod domain;
pub mod error;
pub mod ports;
pub mod serde_util;
pub mod slug;
pub mod tags;

pub use error::{DomainError, RepoError};
