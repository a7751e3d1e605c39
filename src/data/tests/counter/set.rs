use super::*;

/// Expect set to overwrite an existing balance rather than add to it
#[tokio::test]
async fn overwrites_existing_value() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_resource(1, 4, 900)
        .build()
        .await?;

    let resource_repo = ResourceRepository::new(&test.db);
    let result = resource_repo.set(1, 4, 10).await;

    assert!(result.is_ok());
    assert_eq!(resource_repo.get(1, 4).await?.unwrap().amount, 10);

    Ok(())
}

/// Expect set to create the row when absent
#[tokio::test]
async fn creates_missing_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let misc_repo = MiscItemRepository::new(&test.db);
    misc_repo.set(1, 7, 0).await?;

    let row = misc_repo.get(1, 7).await?;
    assert_eq!(row.map(|r| r.data), Some(0));

    Ok(())
}
