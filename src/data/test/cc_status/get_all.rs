use super::*;

/// Tests reading back tracked statuses created by the factory.
///
/// Expected: Ok(Vec) with the stored stages and progress
#[tokio::test]
async fn returns_tracked_threads() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::cc_status::CcStatusFactory::new(db, 42)
        .stage("GP")
        .progress("1/2")
        .build()
        .await?;
    factory::create_status(db, 43).await?;

    let mut all = CcStatusRepository::new(db).get_all().await?;
    all.sort_by_key(|status| status.thread_id);

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].thread_id, 42);
    assert_eq!(all[0].stage, Stage::Gp);
    assert_eq!(all[0].progress, "1/2");
    assert_eq!(all[1].stage, Stage::Qc);

    Ok(())
}

/// Tests reading an empty cache.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let all = CcStatusRepository::new(db).get_all().await?;

    assert!(all.is_empty());

    Ok(())
}

/// Tests that an unrecognised stored stage label is read back as WIP.
///
/// Expected: Ok(Vec) with stage Wip
#[tokio::test]
async fn unknown_stage_reads_as_wip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::cc_status::CcStatusFactory::new(db, 7)
        .stage("Copyediting")
        .build()
        .await?;

    let all = CcStatusRepository::new(db).get_all().await?;

    assert_eq!(all[0].stage, Stage::Wip);

    Ok(())
}
