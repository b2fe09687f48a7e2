use super::*;

fn param(thread_id: i64, stage: Stage, progress: &str) -> UpsertCcStatusParam {
    UpsertCcStatusParam {
        thread_id,
        stage,
        progress: progress.to_string(),
    }
}

/// Tests inserting new rows and overwriting an existing one in a single call.
///
/// Expected: Ok with the existing row updated and the new row inserted
#[tokio::test]
async fn inserts_and_updates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_status(db, 1).await?;

    let repo = CcStatusRepository::new(db);
    repo.upsert_many(vec![
        param(1, Stage::Qc, "1/2"),
        param(2, Stage::Wip, ""),
    ])
    .await?;

    let mut all = repo.get_all().await?;
    all.sort_by_key(|status| status.thread_id);

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].stage, Stage::Qc);
    assert_eq!(all[0].progress, "1/2");
    assert_eq!(all[1].stage, Stage::Wip);
    assert_eq!(all[1].progress, "");

    Ok(())
}

/// Tests that an empty batch does not touch the table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CcStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let written = CcStatusRepository::new(db).upsert_many(Vec::new()).await?;

    assert_eq!(written, 0);

    Ok(())
}
