//! User entity for SeaORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DbConn, DbErr, Set};

use papyr_core::domain::{Product, User};

use super::cart_product;
use crate::database::mapper::ModelMapper;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub is_subscribed: bool,
    pub is_banned: bool,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub shipping_first_name: Option<String>,
    pub shipping_last_name: Option<String>,
    pub shipping_email: Option<String>,
    pub shipping_address1: Option<String>,
    pub shipping_address2: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_state: Option<String>,
    pub shipping_zip: Option<String>,
    pub shipping_country: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cart_product::Entity")]
    CartProduct,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
    #[sea_orm(has_many = "super::token::Entity")]
    Token,
}

impl Related<super::cart_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartProduct.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Token.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The stored password stays behind; the model only ever carries one on
    /// the way in.
    fn into_domain(self, cart: Vec<Product>) -> User {
        User {
            id: Some(self.id),
            email: self.email,
            password: None,
            first_name: self.first_name,
            last_name: self.last_name,
            is_admin: self.is_admin,
            is_subscribed: self.is_subscribed,
            is_banned: self.is_banned,
            address1: self.address1,
            address2: self.address2,
            city: self.city,
            state: self.state,
            zip: self.zip,
            country: self.country,
            shipping_first_name: self.shipping_first_name,
            shipping_last_name: self.shipping_last_name,
            shipping_email: self.shipping_email,
            shipping_address1: self.shipping_address1,
            shipping_address2: self.shipping_address2,
            shipping_city: self.shipping_city,
            shipping_state: self.shipping_state,
            shipping_zip: self.shipping_zip,
            shipping_country: self.shipping_country,
            cart,
            created_at: Some(self.created_at.into()),
            updated_at: Some(self.updated_at.into()),
        }
    }
}

#[async_trait]
impl ModelMapper for Entity {
    type Domain = User;

    const NAME: &'static str = "user";

    fn domain_id(user: &User) -> Option<Uuid> {
        user.id
    }

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn blank(id: Uuid, now: DateTime<Utc>) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            password: Set(String::new()),
            created_at: Set(now.into()),
            ..Default::default()
        }
    }

    fn apply(active: &mut ActiveModel, user: &User, now: DateTime<Utc>) {
        active.email = Set(user.email.clone());
        if let Some(password) = &user.password {
            active.password = Set(password.clone());
        }
        active.first_name = Set(user.first_name.clone());
        active.last_name = Set(user.last_name.clone());
        active.is_admin = Set(user.is_admin);
        active.is_subscribed = Set(user.is_subscribed);
        active.is_banned = Set(user.is_banned);
        active.address1 = Set(user.address1.clone());
        active.address2 = Set(user.address2.clone());
        active.city = Set(user.city.clone());
        active.state = Set(user.state.clone());
        active.zip = Set(user.zip.clone());
        active.country = Set(user.country.clone());
        active.shipping_first_name = Set(user.shipping_first_name.clone());
        active.shipping_last_name = Set(user.shipping_last_name.clone());
        active.shipping_email = Set(user.shipping_email.clone());
        active.shipping_address1 = Set(user.shipping_address1.clone());
        active.shipping_address2 = Set(user.shipping_address2.clone());
        active.shipping_city = Set(user.shipping_city.clone());
        active.shipping_state = Set(user.shipping_state.clone());
        active.shipping_zip = Set(user.shipping_zip.clone());
        active.shipping_country = Set(user.shipping_country.clone());
        active.updated_at = Set(now.into());
    }

    async fn to_model(db: &DbConn, row: Model) -> Result<User, DbErr> {
        let cart = cart_product::load_cart(db, row.id).await?;
        Ok(row.into_domain(cart))
    }

    async fn after_save(db: &DbConn, id: Uuid, user: &User) -> Result<(), DbErr> {
        cart_product::reconcile(db, id, &user.cart_product_ids()).await?;
        Ok(())
    }
}
