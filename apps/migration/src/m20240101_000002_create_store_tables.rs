use sea_orm_migration::prelude::*;

use crate::common::{Common, base_table, content_table, slug_index};
use crate::m20240101_000001_create_content_tables::Users;

/// Store catalogue, per-user carts, orders and user tokens.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                content_table(Products::Table)
                    .col(ColumnDef::new(Products::Price).double().not_null().default(0.0))
                    .col(ColumnDef::new(Products::Quantity).integer().not_null().default(0))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(slug_index("idx_products_slug", Products::Table))
            .await?;

        // Duplicate (user_id, product_id) pairs are allowed: quantity is the row count.
        manager
            .create_table(
                Table::create()
                    .table(CartProducts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Common::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(CartProducts::UserId).uuid().not_null())
                    .col(ColumnDef::new(CartProducts::ProductId).uuid().not_null())
                    .col(
                        ColumnDef::new(Common::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_products_user")
                            .from(CartProducts::Table, CartProducts::UserId)
                            .to(Users::Table, Common::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_products_product")
                            .from(CartProducts::Table, CartProducts::ProductId)
                            .to(Products::Table, Common::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cart_products_user_id")
                    .table(CartProducts::Table)
                    .col(CartProducts::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                base_table(Orders::Table)
                    .col(ColumnDef::new(Orders::UserId).uuid())
                    .col(
                        ColumnDef::new(Orders::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Orders::Total).double().not_null().default(0.0))
                    .col(ColumnDef::new(Orders::Products).json_binary().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_user")
                            .from(Orders::Table, Orders::UserId)
                            .to(Users::Table, Common::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                base_table(Tokens::Table)
                    .col(ColumnDef::new(Tokens::UserId).uuid().not_null())
                    .col(ColumnDef::new(Tokens::Kind).string().not_null())
                    .col(ColumnDef::new(Tokens::Value).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Tokens::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tokens_user")
                            .from(Tokens::Table, Tokens::UserId)
                            .to(Users::Table, Common::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tokens::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CartProducts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Products {
    Table,
    Price,
    Quantity,
}

#[derive(Iden)]
enum CartProducts {
    Table,
    UserId,
    ProductId,
}

#[derive(Iden)]
enum Orders {
    Table,
    UserId,
    Status,
    Total,
    Products,
}

#[derive(Iden)]
enum Tokens {
    Table,
    UserId,
    Kind,
    Value,
    ExpiresAt,
}
