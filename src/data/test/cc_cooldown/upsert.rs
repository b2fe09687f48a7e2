use super::*;

/// Tests recording a new cooldown.
///
/// Expected: Ok with one row holding the channel, identifier and date
#[tokio::test]
async fn inserts_new_cooldown() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcCooldown)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let repo = CcCooldownRepository::new(db);
    repo.upsert(100, "cc-svou", now).await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].channel_id, 100);
    assert_eq!(all[0].identifier, "cc-svou");
    assert_eq!(all[0].date.timestamp(), now.timestamp());

    Ok(())
}

/// Tests that recording the same channel and identifier again moves the date.
///
/// Expected: Ok with a single row holding the later date
#[tokio::test]
async fn overwrites_existing_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcCooldown)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let earlier = Utc::now() - Duration::hours(5);
    let later = Utc::now();

    factory::create_cooldown(db, "100", "cc-svou", earlier).await?;

    let repo = CcCooldownRepository::new(db);
    repo.upsert(100, "cc-svou", later).await?;
    repo.upsert(100, "cc-svuu", later).await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 2);
    let ou = all.iter().find(|c| c.identifier == "cc-svou").unwrap();
    assert_eq!(ou.date.timestamp(), later.timestamp());

    Ok(())
}

/// Tests that a non-numeric stored channel id surfaces as an error on read.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn invalid_channel_id_fails_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcCooldown)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_cooldown(db, "general", "cc-svou", Utc::now()).await?;

    let result = CcCooldownRepository::new(db).get_all().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
