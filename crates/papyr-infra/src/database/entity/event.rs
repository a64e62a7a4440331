//! Event entity for SeaORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DbConn, DbErr, Set};
use sea_orm::entity::prelude::*;

use papyr_core::domain::Event;
use papyr_core::slug::slug_or_title;
use papyr_core::tags::{join_tags, split_tags};

use crate::database::mapper::{ModelMapper, Sluggable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(indexed)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub tags: String,
    pub media: String,
    pub is_published: bool,
    pub date: DateTimeWithTimeZone,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            slug: model.slug,
            content: model.content,
            tags: split_tags(&model.tags),
            media: model.media,
            is_published: model.is_published,
            date: model.date.into(),
            latitude: model.latitude,
            longitude: model.longitude,
            address: model.address,
            created_at: Some(model.created_at.into()),
            updated_at: Some(model.updated_at.into()),
        }
    }
}

#[async_trait]
impl ModelMapper for Entity {
    type Domain = Event;

    const NAME: &'static str = "event";

    fn domain_id(event: &Event) -> Option<Uuid> {
        event.id
    }

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn blank(id: Uuid, now: DateTime<Utc>) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            created_at: Set(now.into()),
            ..Default::default()
        }
    }

    fn apply(active: &mut ActiveModel, event: &Event, now: DateTime<Utc>) {
        active.title = Set(event.title.clone());
        active.slug = Set(slug_or_title(&event.slug, &event.title));
        active.content = Set(event.content.clone());
        active.tags = Set(join_tags(&event.tags));
        active.media = Set(event.media.clone());
        active.is_published = Set(event.is_published);
        active.date = Set(event.date.into());
        active.latitude = Set(event.latitude);
        active.longitude = Set(event.longitude);
        active.address = Set(event.address.clone());
        active.updated_at = Set(now.into());
    }

    async fn to_model(_db: &DbConn, row: Model) -> Result<Event, DbErr> {
        Ok(row.into())
    }
}

impl Sluggable for Entity {
    fn slug_column() -> Column {
        Column::Slug
    }
}
