use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CcAlertChans::Table)
                    .if_not_exists()
                    .col(pk_auto(CcAlertChans::Id))
                    .col(string(CcAlertChans::ServerId))
                    .col(string(CcAlertChans::ChannelId))
                    .col(string(CcAlertChans::Tier))
                    .col(string_null(CcAlertChans::Role))
                    .col(string(CcAlertChans::Gen))
                    .col(string(CcAlertChans::Stage).default("all"))
                    .col(integer(CcAlertChans::Cooldown).default(0))
                    .col(string_null(CcAlertChans::Prefix))
                    .to_owned(),
            )
            .await?;

        // One row per channel, tier, gen and stage
        manager
            .create_index(
                Index::create()
                    .name("idx_cc_alert_chans_unique")
                    .table(CcAlertChans::Table)
                    .col(CcAlertChans::ChannelId)
                    .col(CcAlertChans::Tier)
                    .col(CcAlertChans::Gen)
                    .col(CcAlertChans::Stage)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cc_alert_chans_server_id")
                    .table(CcAlertChans::Table)
                    .col(CcAlertChans::ServerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_cc_alert_chans_server_id")
                    .table(CcAlertChans::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_cc_alert_chans_unique")
                    .table(CcAlertChans::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CcAlertChans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CcAlertChans {
    Table,
    Id,
    ServerId,
    ChannelId,
    Tier,
    Role,
    Gen,
    Stage,
    Cooldown,
    Prefix,
}
