use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CcCooldown::Table)
                    .if_not_exists()
                    .col(string(CcCooldown::ChannelId))
                    .col(string(CcCooldown::Identifier))
                    .col(timestamp(CcCooldown::Date))
                    .primary_key(
                        Index::create()
                            .col(CcCooldown::ChannelId)
                            .col(CcCooldown::Identifier),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CcCooldown::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CcCooldown {
    Table,
    ChannelId,
    Identifier,
    Date,
}
