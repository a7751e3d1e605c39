use super::*;

/// Expect a deleted commander to no longer load
#[tokio::test]
async fn deleted_commander_cannot_load() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let commander_service = CommanderService::new(&test.db);
    let result = commander_service.delete_commander(1).await;

    assert!(result.is_ok());
    assert!(matches!(
        commander_service.load_commander(1).await,
        Err(Error::NotFound(_))
    ));

    Ok(())
}

/// Expect NotFound when deleting twice
#[tokio::test]
async fn fails_on_second_delete() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let commander_service = CommanderService::new(&test.db);
    commander_service.delete_commander(1).await.unwrap();
    let result = commander_service.delete_commander(1).await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}
