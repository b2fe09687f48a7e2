use super::*;

/// Tests deleting a subset of tracked threads.
///
/// Expected: Ok(2) with only the untouched thread left
#[tokio::test]
async fn delete_many_removes_listed_threads() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for thread_id in 1..=3 {
        factory::create_status(db, thread_id).await?;
    }

    let repo = CcStatusRepository::new(db);
    let deleted = repo.delete_many(&[1, 3, 99]).await?;

    assert_eq!(deleted, 2);
    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].thread_id, 2);

    Ok(())
}

/// Tests that deleting with no ids leaves the table alone.
///
/// Expected: Ok(0)
#[tokio::test]
async fn delete_many_with_no_ids_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_status(db, 1).await?;

    let deleted = CcStatusRepository::new(db).delete_many(&[]).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests clearing the cache.
///
/// Expected: Ok(3) with an empty table afterwards
#[tokio::test]
async fn delete_all_clears_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for thread_id in 1..=3 {
        factory::create_status(db, thread_id).await?;
    }

    let repo = CcStatusRepository::new(db);

    assert_eq!(repo.delete_all().await?, 3);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
