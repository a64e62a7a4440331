//! Entity/model synchronization.
//!
//! Every SeaORM entity that backs a domain model implements [`ModelMapper`].
//! The generic repository drives the two directions through it:
//! `to_model` turns a stored row into the API-facing model (relations
//! included) and `blank`/`apply`/`after_save` persist a model back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DbConn, DbErr, EntityTrait};
use uuid::Uuid;

#[async_trait]
pub trait ModelMapper: EntityTrait {
    /// The domain model this entity stores.
    type Domain: Send + Sync + 'static;

    /// Entity name used in logs.
    const NAME: &'static str;

    /// Identifier carried by the model, if it has been persisted before.
    fn domain_id(model: &Self::Domain) -> Option<Uuid>;

    /// Column ordering rows newest first.
    fn created_at_column() -> Self::Column;

    /// A new, empty row with `id`, stamped with its creation time.
    fn blank(id: Uuid, now: DateTime<Utc>) -> Self::ActiveModel;

    /// Overwrite every mutable column from `model` and stamp `updated_at`.
    fn apply(active: &mut Self::ActiveModel, model: &Self::Domain, now: DateTime<Utc>);

    /// Convert a stored row into its domain model.
    ///
    /// Relations are loaded with additional queries on every call.
    async fn to_model(db: &DbConn, row: Self::Model) -> Result<Self::Domain, DbErr>;

    /// Relational side effects once the row with `id` has been written.
    async fn after_save(_db: &DbConn, _id: Uuid, _model: &Self::Domain) -> Result<(), DbErr> {
        Ok(())
    }
}

/// Entities addressable by URL slug.
pub trait Sluggable: ModelMapper {
    fn slug_column() -> Self::Column;
}
