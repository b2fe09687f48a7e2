use super::*;

/// Tests reading subscriptions in insertion order with parsed Discord ids.
///
/// Expected: Ok(Vec) ordered by id with the role and cooldown converted
#[tokio::test]
async fn returns_rows_in_insertion_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcAlertChans)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SubscriptionFactory::new(db)
        .channel_id("300")
        .tier("UU")
        .role(Some("555".to_string()))
        .cooldown(12)
        .build()
        .await?;
    factory::create_subscription(db).await?;

    let subs = CcSubscriptionRepository::new(db).get_all().await?;

    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].channel_id, 300);
    assert_eq!(subs[0].tier, "UU");
    assert_eq!(subs[0].role, Some(555));
    assert_eq!(subs[0].cooldown, 12);
    assert!(subs[0].id < subs[1].id);
    assert_eq!(subs[1].role, None);

    Ok(())
}

/// Tests that a corrupted channel id is reported rather than skipped.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn invalid_channel_id_fails_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcAlertChans)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SubscriptionFactory::new(db)
        .channel_id("not-a-channel")
        .build()
        .await?;

    let result = CcSubscriptionRepository::new(db).get_all().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
