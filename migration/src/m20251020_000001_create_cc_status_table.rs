use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CcStatus::Table)
                    .if_not_exists()
                    .col(big_integer(CcStatus::ThreadId).primary_key())
                    .col(string(CcStatus::Stage))
                    .col(string(CcStatus::Progress).default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CcStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CcStatus {
    Table,
    ThreadId,
    Stage,
    Progress,
}
