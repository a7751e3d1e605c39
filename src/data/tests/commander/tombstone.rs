use super::*;

/// Expect a tombstoned commander to be invisible and unchangeable
#[tokio::test]
async fn tombstoned_commander_is_hidden() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let commander_repo = CommanderRepository::new(&test.db);
    let result = commander_repo.tombstone(1, now()).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 1);
    assert!(commander_repo.get_live(1).await?.is_none());
    assert_eq!(commander_repo.set_last_login(1, now()).await?, 0);
    assert_eq!(commander_repo.tombstone(1, now()).await?, 0);

    Ok(())
}
