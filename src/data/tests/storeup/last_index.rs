use super::*;

/// Expect 0 for a storeup the commander never claimed from
#[tokio::test]
async fn missing_row_reads_as_zero() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let storeup_repo = StoreupAwardRepository::new(&test.db);
    let result = storeup_repo.last_index(1, 99).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 0);

    Ok(())
}

/// Expect set_index to overwrite progress and list to return every storeup of the commander
#[tokio::test]
async fn set_index_overwrites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    test.ledger().insert_storeup_progress(1, 1, 5).await?;

    let storeup_repo = StoreupAwardRepository::new(&test.db);
    storeup_repo.set_index(1, 1, 2).await?;
    storeup_repo.set_index(1, 2, 7).await?;

    let progress = storeup_repo.list(1).await?;
    let indexes: Vec<(i32, i32)> = progress
        .iter()
        .map(|p| (p.storeup_id, p.last_award_index))
        .collect();
    assert_eq!(indexes, vec![(1, 2), (2, 7)]);

    Ok(())
}
