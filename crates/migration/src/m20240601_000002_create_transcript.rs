//! Create `transcript` table.
//! Keyed by RefSeq NM number; optionally points at the gene that claimed it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transcript::Table)
                    .if_not_exists()
                    .col(text(Transcript::NmNumber).primary_key())
                    .col(text_null(Transcript::GeneName))
                    .col(json_binary(Transcript::Attributes).not_null())
                    .col(timestamp_with_time_zone(Transcript::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transcript_gene")
                            .from(Transcript::Table, Transcript::GeneName)
                            .to(Gene::Table, Gene::Name)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Transcript::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Transcript { Table, NmNumber, GeneName, Attributes, CreatedAt }

#[derive(DeriveIden)]
enum Gene { Table, Name }
