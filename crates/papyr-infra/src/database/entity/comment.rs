//! Comment entity for SeaORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DbConn, DbErr, Set};
use sea_orm::entity::prelude::*;

use papyr_core::domain::Comment;

use crate::database::mapper::ModelMapper;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub blog_id: Uuid,
    pub author_id: Option<Uuid>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blog::Entity",
        from = "Column::BlogId",
        to = "super::blog::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Blog,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Author,
}

impl Related<super::blog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blog.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            blog_id: model.blog_id,
            author_id: model.author_id,
            content: model.content,
            created_at: Some(model.created_at.into()),
            updated_at: Some(model.updated_at.into()),
        }
    }
}

#[async_trait]
impl ModelMapper for Entity {
    type Domain = Comment;

    const NAME: &'static str = "comment";

    fn domain_id(comment: &Comment) -> Option<Uuid> {
        comment.id
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

    fn apply(active: &mut ActiveModel, comment: &Comment, now: DateTime<Utc>) {
        active.blog_id = Set(comment.blog_id);
        active.author_id = Set(comment.author_id);
        active.content = Set(comment.content.clone());
        active.updated_at = Set(now.into());
    }

    async fn to_model(_db: &DbConn, row: Model) -> Result<Comment, DbErr> {
        Ok(row.into())
    }
}
