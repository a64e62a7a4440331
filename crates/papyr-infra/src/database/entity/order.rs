//! Order entity for SeaORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DbConn, DbErr, Set};

use papyr_core::domain::{Order, OrderStatus, Product};

use crate::database::mapper::ModelMapper;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub status: String,
    pub total: f64,
    /// Snapshot of the ordered products.
    #[sea_orm(column_type = "JsonBinary")]
    pub products: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Order {
    type Error = DbErr;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let status = model.status.parse::<OrderStatus>().map_err(DbErr::Custom)?;
        let products: Vec<Product> = serde_json::from_value(model.products)
            .map_err(|e| DbErr::Json(format!("order {} products: {e}", model.id)))?;

        Ok(Self {
            id: Some(model.id),
            user_id: model.user_id,
            status,
            total: model.total,
            products,
            created_at: Some(model.created_at.into()),
            updated_at: Some(model.updated_at.into()),
        })
    }
}

#[async_trait]
impl ModelMapper for Entity {
    type Domain = Order;

    const NAME: &'static str = "order";

    fn domain_id(order: &Order) -> Option<Uuid> {
        order.id
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

    fn apply(active: &mut ActiveModel, order: &Order, now: DateTime<Utc>) {
        // An order posted without a total is charged the snapshot's sum.
        let total = if order.total > 0.0 {
            order.total
        } else {
            order.products_total()
        };

        active.user_id = Set(order.user_id);
        active.status = Set(order.status.as_str().to_owned());
        active.total = Set(total);
        active.products = Set(serde_json::json!(order.products));
        active.updated_at = Set(now.into());
    }

    async fn to_model(_db: &DbConn, row: Model) -> Result<Order, DbErr> {
        Order::try_from(row)
    }
}
