use sea_orm_migration::prelude::*;

use crate::common::{Common, base_table, content_table, slug_index};

/// Users plus the published content: posts, events, blogs and comments.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                base_table(Users::Table)
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::FirstName).string().not_null().default(""))
                    .col(ColumnDef::new(Users::LastName).string().not_null().default(""))
                    .col(ColumnDef::new(Users::IsAdmin).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Users::IsSubscribed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::IsBanned).boolean().not_null().default(false))
                    .col(ColumnDef::new(Users::Address1).string())
                    .col(ColumnDef::new(Users::Address2).string())
                    .col(ColumnDef::new(Users::City).string())
                    .col(ColumnDef::new(Users::State).string())
                    .col(ColumnDef::new(Users::Zip).string())
                    .col(ColumnDef::new(Users::Country).string())
                    .col(ColumnDef::new(Users::ShippingFirstName).string())
                    .col(ColumnDef::new(Users::ShippingLastName).string())
                    .col(ColumnDef::new(Users::ShippingEmail).string())
                    .col(ColumnDef::new(Users::ShippingAddress1).string())
                    .col(ColumnDef::new(Users::ShippingAddress2).string())
                    .col(ColumnDef::new(Users::ShippingCity).string())
                    .col(ColumnDef::new(Users::ShippingState).string())
                    .col(ColumnDef::new(Users::ShippingZip).string())
                    .col(ColumnDef::new(Users::ShippingCountry).string())
                    .to_owned(),
            )
            .await?;

        manager.create_table(content_table(Posts::Table)).await?;
        manager
            .create_index(slug_index("idx_posts_slug", Posts::Table))
            .await?;

        manager
            .create_table(
                content_table(Events::Table)
                    .col(
                        ColumnDef::new(Events::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Events::Latitude).double())
                    .col(ColumnDef::new(Events::Longitude).double())
                    .col(ColumnDef::new(Events::Address).string().not_null().default(""))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(slug_index("idx_events_slug", Events::Table))
            .await?;

        manager
            .create_table(
                content_table(Blogs::Table)
                    .col(ColumnDef::new(Blogs::PublishedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(slug_index("idx_blogs_slug", Blogs::Table))
            .await?;

        manager
            .create_table(
                base_table(Comments::Table)
                    .col(ColumnDef::new(Comments::BlogId).uuid().not_null())
                    .col(ColumnDef::new(Comments::AuthorId).uuid())
                    .col(ColumnDef::new(Common::Content).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_blog")
                            .from(Comments::Table, Comments::BlogId)
                            .to(Blogs::Table, Common::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_author")
                            .from(Comments::Table, Comments::AuthorId)
                            .to(Users::Table, Common::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_comments_blog_id")
                    .table(Comments::Table)
                    .col(Comments::BlogId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(crate) enum Users {
    Table,
    Email,
    Password,
    FirstName,
    LastName,
    IsAdmin,
    IsSubscribed,
    IsBanned,
    Address1,
    Address2,
    City,
    State,
    Zip,
    Country,
    ShippingFirstName,
    ShippingLastName,
    ShippingEmail,
    ShippingAddress1,
    ShippingAddress2,
    ShippingCity,
    ShippingState,
    ShippingZip,
    ShippingCountry,
}

#[derive(Iden)]
enum Posts {
    Table,
}

#[derive(Iden)]
enum Events {
    Table,
    Date,
    Latitude,
    Longitude,
    Address,
}

#[derive(Iden)]
enum Blogs {
    Table,
    PublishedAt,
}

#[derive(Iden)]
enum Comments {
    Table,
    BlogId,
    AuthorId,
}
