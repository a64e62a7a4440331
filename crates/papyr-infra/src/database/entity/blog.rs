//! Blog entity for SeaORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DbConn, DbErr, QueryOrder, Set};

use papyr_core::domain::{Blog, Comment};
use papyr_core::slug::slug_or_title;
use papyr_core::tags::{join_tags, split_tags};

use super::comment;
use crate::database::mapper::{ModelMapper, Sluggable};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
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
    pub published_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    fn into_domain(self, comments: Vec<Comment>) -> Blog {
        Blog {
            id: Some(self.id),
            title: self.title,
            slug: self.slug,
            content: self.content,
            tags: split_tags(&self.tags),
            media: self.media,
            is_published: self.is_published,
            published_at: self.published_at.map(Into::into),
            comments,
            created_at: Some(self.created_at.into()),
            updated_at: Some(self.updated_at.into()),
        }
    }
}

#[async_trait]
impl ModelMapper for Entity {
    type Domain = Blog;

    const NAME: &'static str = "blog";

    fn domain_id(blog: &Blog) -> Option<Uuid> {
        blog.id
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

    fn apply(active: &mut ActiveModel, blog: &Blog, now: DateTime<Utc>) {
        active.title = Set(blog.title.clone());
        active.slug = Set(slug_or_title(&blog.slug, &blog.title));
        active.content = Set(blog.content.clone());
        active.tags = Set(join_tags(&blog.tags));
        active.media = Set(blog.media.clone());
        active.is_published = Set(blog.is_published);
        active.published_at = Set(blog.effective_published_at(now).map(Into::into));
        active.updated_at = Set(now.into());
    }

    async fn to_model(db: &DbConn, row: Model) -> Result<Blog, DbErr> {
        let comments = comment::Entity::find()
            .filter(comment::Column::BlogId.eq(row.id))
            .order_by_desc(comment::Column::CreatedAt)
            .all(db)
            .await?
            .into_iter()
            .map(Comment::from)
            .collect();

        Ok(row.into_domain(comments))
    }
}

impl Sluggable for Entity {
    fn slug_column() -> Column {
        Column::Slug
    }
}
