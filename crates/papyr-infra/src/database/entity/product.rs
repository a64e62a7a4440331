//! Product entity for SeaORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DbConn, DbErr, Set};
use sea_orm::entity::prelude::*;

use papyr_core::domain::Product;
use papyr_core::slug::slug_or_title;
use papyr_core::tags::{join_tags, split_tags};

use crate::database::mapper::{ModelMapper, Sluggable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
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
    pub price: f64,
    pub quantity: i32,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cart_product::Entity")]
    CartProduct,
}

impl Related<super::cart_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            slug: model.slug,
            content: model.content,
            tags: split_tags(&model.tags),
            media: model.media,
            price: model.price,
            quantity: model.quantity,
            is_published: model.is_published,
            created_at: Some(model.created_at.into()),
            updated_at: Some(model.updated_at.into()),
        }
    }
}

#[async_trait]
impl ModelMapper for Entity {
    type Domain = Product;

    const NAME: &'static str = "product";

    fn domain_id(product: &Product) -> Option<Uuid> {
        product.id
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

    fn apply(active: &mut ActiveModel, product: &Product, now: DateTime<Utc>) {
        active.title = Set(product.title.clone());
        active.slug = Set(slug_or_title(&product.slug, &product.title));
        active.content = Set(product.content.clone());
        active.tags = Set(join_tags(&product.tags));
        active.media = Set(product.media.clone());
        active.price = Set(product.price);
        active.quantity = Set(product.quantity);
        active.is_published = Set(product.is_published);
        active.updated_at = Set(now.into());
    }

    async fn to_model(_db: &DbConn, row: Model) -> Result<Product, DbErr> {
        Ok(row.into())
    }
}

impl Sluggable for Entity {
    fn slug_column() -> Column {
        Column::Slug
    }
}
