use super::*;

/// Tests deleting the subscriptions of one channel.
///
/// Expected: Ok(2) with the other channel's subscription kept
#[tokio::test]
async fn delete_by_channel_removes_channel_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcAlertChans)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SubscriptionFactory::new(db).channel_id("100").build().await?;
    SubscriptionFactory::new(db)
        .channel_id("100")
        .tier("UU")
        .build()
        .await?;
    SubscriptionFactory::new(db).channel_id("200").build().await?;

    let repo = CcSubscriptionRepository::new(db);
    let deleted = repo.delete_by_channel(100).await?;

    assert_eq!(deleted, 2);
    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].channel_id, 200);

    Ok(())
}

/// Tests deleting the subscriptions of one guild.
///
/// Expected: Ok(1) with the other guild's subscription kept
#[tokio::test]
async fn delete_by_server_removes_guild_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcAlertChans)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SubscriptionFactory::new(db).server_id("10").build().await?;
    SubscriptionFactory::new(db).server_id("20").build().await?;

    let repo = CcSubscriptionRepository::new(db);
    let deleted = repo.delete_by_server(10).await?;

    assert_eq!(deleted, 1);
    assert_eq!(repo.get_all().await?[0].server_id, 20);

    Ok(())
}
