use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Transcript: lookups by owning gene (delete cascade, listing)
        manager
            .create_index(
                Index::create()
                    .name("idx_transcript_gene_name")
                    .table(Transcript::Table)
                    .col(Transcript::GeneName)
                    .to_owned(),
            )
            .await?;

        // Gene: criteria lookup by NM number
        manager
            .create_index(
                Index::create()
                    .name("idx_gene_nm_number")
                    .table(Gene::Table)
                    .col(Gene::NmNumber)
                    .to_owned(),
            )
            .await?;

        // Gene: list in insertion order
        manager
            .create_index(
                Index::create()
                    .name("idx_gene_created_at")
                    .table(Gene::Table)
                    .col(Gene::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_gene_created_at").table(Gene::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_gene_nm_number").table(Gene::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_transcript_gene_name").table(Transcript::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Gene { Table, NmNumber, CreatedAt }

#[derive(DeriveIden)]
enum Transcript { Table, GeneName }
