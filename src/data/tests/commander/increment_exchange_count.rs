use super::*;

/// Expect the counter to grow by the given amount
#[tokio::test]
async fn increments_counter() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let commander_repo = CommanderRepository::new(&test.db);
    let result = commander_repo.increment_exchange_count(1, 1, 400).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), Some(1));

    Ok(())
}

/// Expect the counter to saturate at the cap
#[tokio::test]
async fn saturates_at_cap() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let commander_repo = CommanderRepository::new(&test.db);
    commander_repo.increment_exchange_count(1, 398, 400).await?;
    let result = commander_repo.increment_exchange_count(1, 5, 400).await?;

    assert_eq!(result, Some(400));
    assert_eq!(
        commander_repo.increment_exchange_count(1, 1, 400).await?,
        Some(400)
    );

    Ok(())
}

/// Expect None for a commander that does not exist
#[tokio::test]
async fn missing_commander() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let commander_repo = CommanderRepository::new(&test.db);

    assert_eq!(commander_repo.increment_exchange_count(5, 1, 400).await?, None);

    Ok(())
}
