use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use papyr_core::error::RepoError;
use papyr_core::ports::{BaseRepository, SlugLookup};

use super::error::map_db_err;
use super::mapper::{ModelMapper, Sluggable};

/// Generic PostgreSQL repository over any [`ModelMapper`] entity.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

impl<E> PostgresBaseRepository<E>
where
    E: ModelMapper,
    E::Model: Send + Sync,
{
    /// Run `select` and map every row, one relation lookup at a time.
    pub(crate) async fn fetch_all(&self, select: Select<E>) -> Result<Vec<E::Domain>, RepoError> {
        let rows = select.all(&self.db).await.map_err(map_db_err)?;

        let mut models = Vec::with_capacity(rows.len());
        for row in rows {
            models.push(E::to_model(&self.db, row).await.map_err(map_db_err)?);
        }
        Ok(models)
    }

    pub(crate) async fn fetch_one(&self, select: Select<E>) -> Result<Option<E::Domain>, RepoError> {
        match select.one(&self.db).await.map_err(map_db_err)? {
            Some(row) => Ok(Some(E::to_model(&self.db, row).await.map_err(map_db_err)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<E> BaseRepository<E::Domain, Uuid> for PostgresBaseRepository<E>
where
    E: ModelMapper,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
{
    async fn find_by_id(&self, id: Uuid) -> Result<Option<E::Domain>, RepoError> {
        tracing::debug!(entity = E::NAME, %id, "Finding by id");
        self.fetch_one(E::find_by_id(id)).await
    }

    async fn find_all(&self) -> Result<Vec<E::Domain>, RepoError> {
        self.fetch_all(E::find().order_by_desc(E::created_at_column()))
            .await
    }

    async fn save(&self, entity: E::Domain) -> Result<E::Domain, RepoError> {
        let now = Utc::now();
        let requested = E::domain_id(&entity);

        let existing = match requested {
            Some(id) => E::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(map_db_err)?,
            None => None,
        };

        // A supplied id that matches nothing creates the row under that id.
        let id = requested.unwrap_or_else(Uuid::new_v4);

        let row = match existing {
            Some(found) => {
                let mut active = found.into_active_model();
                E::apply(&mut active, &entity, now);
                tracing::debug!(entity = E::NAME, %id, "Updating row");
                active.update(&self.db).await.map_err(map_db_err)?
            }
            None => {
                let mut active = E::blank(id, now);
                E::apply(&mut active, &entity, now);
                tracing::debug!(entity = E::NAME, %id, "Inserting row");
                active.insert(&self.db).await.map_err(map_db_err)?
            }
        };

        E::after_save(&self.db, id, &entity)
            .await
            .map_err(map_db_err)?;

        E::to_model(&self.db, row).await.map_err(map_db_err)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(entity = E::NAME, %id, "Deleted row");
        Ok(())
    }
}

#[async_trait]
impl<E> SlugLookup<E::Domain> for PostgresBaseRepository<E>
where
    E: Sluggable,
    E::Model: Send + Sync,
{
    async fn find_by_slug(&self, slug: &str) -> Result<Option<E::Domain>, RepoError> {
        tracing::debug!(entity = E::NAME, slug, "Finding by slug");
        self.fetch_one(E::find().filter(E::slug_column().eq(slug)))
            .await
    }
}
