use super::*;

/// Expect a missing row to be created holding exactly the granted amount
#[tokio::test]
async fn creates_missing_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let item_repo = ItemRepository::new(&test.db);
    let result = item_repo.increment_or_create(1, 15001, 4).await;

    assert!(result.is_ok());
    assert_eq!(item_repo.get(1, 15001).await?.unwrap().count, 4);

    Ok(())
}

/// Expect an existing row to grow by the granted amount
#[tokio::test]
async fn adds_to_existing_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_resource(1, 1, 250)
        .build()
        .await?;

    let resource_repo = ResourceRepository::new(&test.db);
    resource_repo.increment_or_create(1, 1, 50).await?;
    resource_repo.increment_or_create(1, 1, 50).await?;

    assert_eq!(resource_repo.get(1, 1).await?.unwrap().amount, 350);
    assert_eq!(resource_repo.list(1).await?.len(), 1);

    Ok(())
}

/// Expect grants made inside a rolled back transaction to disappear
#[tokio::test]
async fn rolls_back_with_transaction() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_equipment(1, 2001, 1)
        .build()
        .await?;

    let txn = test.db.begin().await?;
    EquipmentRepository::new(&txn)
        .increment_or_create(1, 2001, 3)
        .await?;
    txn.rollback().await?;

    let equipment_repo = EquipmentRepository::new(&test.db);
    assert_eq!(equipment_repo.get(1, 2001).await?.unwrap().count, 1);

    Ok(())
}
