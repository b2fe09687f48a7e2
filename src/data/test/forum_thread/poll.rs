use super::*;

const NODE: i64 = 758;
const OTHER_NODE: i64 = 9;

/// Tests that threads posted since the last check are returned with their prefix
/// labels resolved.
///
/// Expected: Ok(Vec) with the new thread and its "Quality Control" label
#[tokio::test]
async fn returns_new_threads_with_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let since = Utc::now() - Duration::hours(1);

    factory::create_prefix(db, 3, "Quality Control").await?;
    ForumThreadFactory::new(db, 1, NODE)
        .title("Zapdos [QC 0/2]")
        .prefix_id(3)
        .build()
        .await?;
    factory::create_thread(db, 2, NODE, "Moltres").await?;

    let threads = ForumThreadRepository::new(db).poll(&[NODE], since, &[]).await?;

    assert_eq!(threads.len(), 2);
    assert_eq!(threads[0].thread_id, 1);
    assert_eq!(threads[0].node_id, NODE);
    assert_eq!(threads[0].title, "Zapdos [QC 0/2]");
    assert_eq!(threads[0].phrase_text.as_deref(), Some("Quality Control"));
    assert_eq!(threads[1].phrase_text, None);

    Ok(())
}

/// Tests the poll filters: old, hidden and unmonitored threads are skipped.
///
/// Expected: Ok(Vec) with only the fresh visible thread in a monitored node
#[tokio::test]
async fn skips_old_hidden_and_unmonitored_threads() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let since = Utc::now() - Duration::hours(1);

    factory::create_thread(db, 1, NODE, "Fresh").await?;
    ForumThreadFactory::new(db, 2, NODE)
        .post_date(since - Duration::days(3))
        .build()
        .await?;
    ForumThreadFactory::new(db, 3, NODE)
        .discussion_state("deleted")
        .build()
        .await?;
    factory::create_thread(db, 4, OTHER_NODE, "Elsewhere").await?;

    let threads = ForumThreadRepository::new(db).poll(&[NODE], since, &[]).await?;

    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].thread_id, 1);

    Ok(())
}

/// Tests that tracked threads are returned regardless of their post date, as long
/// as they are still in a monitored node.
///
/// Expected: Ok(Vec) with the old tracked thread but not the moved one
#[tokio::test]
async fn includes_tracked_threads_in_monitored_nodes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let since = Utc::now() - Duration::hours(1);
    let long_ago = since - Duration::days(30);

    ForumThreadFactory::new(db, 10, NODE)
        .post_date(long_ago)
        .build()
        .await?;
    ForumThreadFactory::new(db, 11, OTHER_NODE)
        .post_date(long_ago)
        .build()
        .await?;
    ForumThreadFactory::new(db, 12, NODE)
        .post_date(long_ago)
        .build()
        .await?;

    let threads = ForumThreadRepository::new(db)
        .poll(&[NODE], since, &[10, 11])
        .await?;

    let ids: Vec<i64> = threads.iter().map(|t| t.thread_id).collect();
    assert_eq!(ids, vec![10]);

    Ok(())
}

/// Tests that polling without monitored nodes never queries the forum.
///
/// Expected: Ok(empty) even though the forum tables do not exist
#[tokio::test]
async fn no_nodes_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let threads = ForumThreadRepository::new(db)
        .poll(&[], Utc::now(), &[1])
        .await?;

    assert!(threads.is_empty());

    Ok(())
}
