use super::*;

/// Expect only the first delete of a build to report a row
#[tokio::test]
async fn deletes_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    let build = test.ledger().insert_build(1, 101, now()).await?;

    let build_repo = BuildRepository::new(&test.db);
    let result = build_repo.delete_owned(1, build.id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 1);
    assert_eq!(build_repo.delete_owned(1, build.id).await?, 0);
    assert!(build_repo.get(build.id).await?.is_none());

    Ok(())
}

/// Expect another commander's build to be left alone
#[tokio::test]
async fn ignores_foreign_build() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_commander(2)
        .build()
        .await?;
    let build = test.ledger().insert_build(2, 101, now()).await?;

    let build_repo = BuildRepository::new(&test.db);

    assert_eq!(build_repo.delete_owned(1, build.id).await?, 0);
    assert_eq!(build_repo.set_finishes_at(1, build.id, now()).await?, 0);
    assert!(build_repo.get(build.id).await?.is_some());

    Ok(())
}

/// Expect create to store the pool and finish time
#[tokio::test]
async fn creates_build() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    let finishes_at = now() + Duration::seconds(1500);

    let build_repo = BuildRepository::new(&test.db);
    let created = build_repo.create(1, 101, 2, finishes_at).await?;

    let stored = build_repo.get(created.id).await?.unwrap();
    assert_eq!(stored.pool_id, 2);
    assert_eq!(stored.finishes_at, finishes_at);

    Ok(())
}
