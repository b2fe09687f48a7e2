use super::*;

/// Tests sweeping cooldowns older than a cutoff.
///
/// Expected: Ok(1) with the recent cooldown kept
#[tokio::test]
async fn delete_older_than_keeps_recent_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcCooldown)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    factory::create_cooldown(db, "100", "cc-svou", now - Duration::hours(30)).await?;
    factory::create_cooldown(db, "100", "cc-svuu", now - Duration::hours(2)).await?;

    let repo = CcCooldownRepository::new(db);
    let deleted = repo.delete_older_than(now - Duration::hours(24)).await?;

    assert_eq!(deleted, 1);
    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].identifier, "cc-svuu");

    Ok(())
}

/// Tests removing every cooldown of one channel.
///
/// Expected: Ok(2) with the other channel's cooldown kept
#[tokio::test]
async fn delete_by_channel_only_touches_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcCooldown)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    factory::create_cooldown(db, "100", "cc-svou", now).await?;
    factory::create_cooldown(db, "100", "cc-ssou", now).await?;
    factory::create_cooldown(db, "200", "cc-svou", now).await?;

    let repo = CcCooldownRepository::new(db);
    let deleted = repo.delete_by_channel(100).await?;

    assert_eq!(deleted, 2);
    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].channel_id, 200);

    Ok(())
}
