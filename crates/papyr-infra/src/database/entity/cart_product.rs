//! CartProduct entity for SeaORM - the join table behind `User::cart`.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{DbConn, DbErr, QueryOrder, Set};

use papyr_core::cart::CartDiff;
use papyr_core::domain::Product;

use super::product;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cart_products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Product,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

async fn rows_for(db: &DbConn, user_id: Uuid) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await
}

/// The user's cart, newest entry first.
///
/// Products are fetched with a second query and joined in memory. Entries
/// pointing at a product that no longer exists are skipped.
pub(crate) async fn load_cart(db: &DbConn, user_id: Uuid) -> Result<Vec<Product>, DbErr> {
    let entries = rows_for(db, user_id).await?;
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids: Vec<Uuid> = entries.iter().map(|entry| entry.product_id).collect();
    let products: HashMap<Uuid, product::Model> = product::Entity::find()
        .filter(product::Column::Id.is_in(product_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|product| (product.id, product))
        .collect();

    let mut cart = Vec::with_capacity(entries.len());
    for entry in entries {
        match products.get(&entry.product_id) {
            Some(product) => cart.push(Product::from(product.clone())),
            None => tracing::warn!(
                %user_id,
                product_id = %entry.product_id,
                "Cart entry references a missing product, skipping"
            ),
        }
    }

    Ok(cart)
}

/// Bring the stored cart in line with `incoming` product ids.
///
/// Surplus stored rows are deleted (first matching rows in newest-first
/// order), missing ones inserted one at a time.
pub(crate) async fn reconcile(
    db: &DbConn,
    user_id: Uuid,
    incoming: &[Uuid],
) -> Result<CartDiff, DbErr> {
    let stored = rows_for(db, user_id).await?;
    let rows: Vec<(Uuid, Uuid)> = stored
        .iter()
        .map(|row| (row.id, row.product_id))
        .collect();
    let stored_products: Vec<Uuid> = rows.iter().map(|(_, product_id)| *product_id).collect();

    let diff = CartDiff::between(&stored_products, incoming);
    if diff.is_empty() {
        return Ok(diff);
    }

    let stale = diff.rows_to_remove(&rows);
    if !stale.is_empty() {
        Entity::delete_many()
            .filter(Column::Id.is_in(stale))
            .exec(db)
            .await?;
    }

    for product_id in &diff.added {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            product_id: Set(*product_id),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await?;
    }

    tracing::debug!(
        %user_id,
        added = diff.added.len(),
        removed = diff.removed.len(),
        "Cart reconciled"
    );

    Ok(diff)
}
