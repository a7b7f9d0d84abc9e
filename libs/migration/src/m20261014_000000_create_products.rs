use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(string(Products::Sku).primary_key())
                    .col(string(Products::Name))
                    .col(text(Products::Description).default(""))
                    .col(string(Products::Category).default(""))
                    .col(string(Products::Brand).default(""))
                    .col(double(Products::Price).default(0.0))
                    .col(string_null(Products::ImageUrl))
                    .col(string(Products::MerchantId))
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Sku,
    Name,
    Description,
    Category,
    Brand,
    Price,
    ImageUrl,
    MerchantId,
    CreatedAt,
}
