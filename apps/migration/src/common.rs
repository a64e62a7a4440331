use sea_orm_migration::prelude::*;

/// Column names shared by several tables.
#[derive(Iden)]
pub(crate) enum Common {
    Id,
    Title,
    Slug,
    Content,
    Tags,
    Media,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}

/// `id` primary key plus `created_at`/`updated_at`.
pub(crate) fn base_table<T>(table: T) -> TableCreateStatement
where
    T: IntoTableRef,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(ColumnDef::new(Common::Id).uuid().not_null().primary_key())
        .col(
            ColumnDef::new(Common::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Common::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

/// Base table plus the published-content columns (posts, events, blogs, products).
pub(crate) fn content_table<T>(table: T) -> TableCreateStatement
where
    T: IntoTableRef,
{
    base_table(table)
        .col(ColumnDef::new(Common::Title).string().not_null())
        .col(ColumnDef::new(Common::Slug).string().not_null())
        .col(ColumnDef::new(Common::Content).text().not_null().default(""))
        .col(ColumnDef::new(Common::Tags).string().not_null().default(""))
        .col(ColumnDef::new(Common::Media).string().not_null().default(""))
        .col(
            ColumnDef::new(Common::IsPublished)
                .boolean()
                .not_null()
                .default(false),
        )
        .to_owned()
}

pub(crate) fn slug_index<T>(name: &str, table: T) -> IndexCreateStatement
where
    T: IntoTableRef,
{
    Index::create()
        .if_not_exists()
        .name(name)
        .table(table)
        .col(Common::Slug)
        .to_owned()
}
