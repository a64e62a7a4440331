//! Post entity for SeaORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DbConn, DbErr, Set};
use sea_orm::entity::prelude::*;

use papyr_core::domain::Post;
use papyr_core::slug::slug_or_title;
use papyr_core::tags::{join_tags, split_tags};

use crate::database::mapper::{ModelMapper, Sluggable};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
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
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            slug: model.slug,
            content: model.content,
            tags: split_tags(&model.tags),
            media: model.media,
            is_published: model.is_published,
            created_at: Some(model.created_at.into()),
            updated_at: Some(model.updated_at.into()),
        }
    }
}

#[async_trait]
impl ModelMapper for Entity {
    type Domain = Post;

    const NAME: &'static str = "post";

    fn domain_id(post: &Post) -> Option<Uuid> {
        post.id
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

    fn apply(active: &mut ActiveModel, post: &Post, now: DateTime<Utc>) {
        active.title = Set(post.title.clone());
        active.slug = Set(slug_or_title(&post.slug, &post.title));
        active.content = Set(post.content.clone());
        active.tags = Set(join_tags(&post.tags));
        active.media = Set(post.media.clone());
        active.is_published = Set(post.is_published);
        active.updated_at = Set(now.into());
    }

    async fn to_model(_db: &DbConn, row: Model) -> Result<Post, DbErr> {
        Ok(row.into())
    }
}

impl Sluggable for Entity {
    fn slug_column() -> Column {
        Column::Slug
    }
}
