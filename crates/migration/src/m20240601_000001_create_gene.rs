//! Create `gene` table.
//!
//! `name` carries the unique constraint that makes concurrent creates of the
//! same gene fail at insert time.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gene::Table)
                    .if_not_exists()
                    .col(uuid(Gene::Id).primary_key())
                    .col(text(Gene::Name).unique_key().not_null())
                    .col(text(Gene::NmNumber).not_null())
                    .col(json_binary(Gene::Attributes).not_null())
                    .col(timestamp_with_time_zone(Gene::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Gene::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Gene::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Gene { Table, Id, Name, NmNumber, Attributes, CreatedAt, UpdatedAt }
