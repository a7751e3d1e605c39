use super::*;

/// Expect the first award to create the progress row at index 1
#[tokio::test]
async fn first_award_creates_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let storeup_repo = StoreupAwardRepository::new(&test.db);
    let result = storeup_repo.try_advance(1, 3, 1).await;

    assert!(result.is_ok());
    assert!(result.unwrap());
    assert_eq!(storeup_repo.last_index(1, 3).await?, 1);

    Ok(())
}

/// Expect claiming award 1 twice to succeed only once
#[tokio::test]
async fn first_award_is_claimed_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let storeup_repo = StoreupAwardRepository::new(&test.db);

    assert!(storeup_repo.try_advance(1, 3, 1).await?);
    assert!(!storeup_repo.try_advance(1, 3, 1).await?);
    assert_eq!(storeup_repo.last_index(1, 3).await?, 1);

    Ok(())
}

/// Expect award 1 to be claimable on a row reset to 0
#[tokio::test]
async fn first_award_on_zeroed_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    test.ledger().insert_storeup_progress(1, 3, 0).await?;

    let storeup_repo = StoreupAwardRepository::new(&test.db);

    assert!(storeup_repo.try_advance(1, 3, 1).await?);
    assert_eq!(storeup_repo.last_index(1, 3).await?, 1);

    Ok(())
}

/// Expect the index to advance only from exactly target - 1
#[tokio::test]
async fn advances_only_from_previous_index() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    test.ledger().insert_storeup_progress(1, 3, 2).await?;

    let storeup_repo = StoreupAwardRepository::new(&test.db);

    assert!(!storeup_repo.try_advance(1, 3, 2).await?);
    assert!(!storeup_repo.try_advance(1, 3, 4).await?);
    assert!(storeup_repo.try_advance(1, 3, 3).await?);
    assert_eq!(storeup_repo.last_index(1, 3).await?, 3);

    Ok(())
}

/// Expect a later award to fail when nothing has been claimed yet
#[tokio::test]
async fn skipping_ahead_without_row_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let storeup_repo = StoreupAwardRepository::new(&test.db);

    assert!(!storeup_repo.try_advance(1, 3, 2).await?);
    assert_eq!(storeup_repo.last_index(1, 3).await?, 0);

    Ok(())
}
