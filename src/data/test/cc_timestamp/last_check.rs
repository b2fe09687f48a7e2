use super::*;

/// Tests reading a topic that was never polled.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_topic_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcTimestamp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let last = CcTimestampRepository::new(db).get_last_check("cc").await?;

    assert!(last.is_none());

    Ok(())
}

/// Tests that storing the check time twice keeps one row with the latest time.
///
/// Expected: Ok(Some(later))
#[tokio::test]
async fn set_overwrites_previous_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcTimestamp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let later = Utc::now();
    let earlier = later - Duration::minutes(5);

    let repo = CcTimestampRepository::new(db);
    repo.set_last_check("cc", earlier).await?;
    repo.set_last_check("cc", later).await?;
    repo.set_last_check("other", earlier).await?;

    let last = repo.get_last_check("cc").await?;

    assert_eq!(last.unwrap().timestamp(), later.timestamp());
    assert_eq!(
        repo.get_last_check("other").await?.unwrap().timestamp(),
        earlier.timestamp()
    );

    Ok(())
}
