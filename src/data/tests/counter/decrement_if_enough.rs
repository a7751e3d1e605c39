use super::*;

/// Expect Ok(true) and a reduced balance when the stored amount covers the spend
#[tokio::test]
async fn decrements_when_balance_covers_amount() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_resource(1, 1, 100)
        .build()
        .await?;

    let resource_repo = ResourceRepository::new(&test.db);
    let result = resource_repo.decrement_if_enough(1, 1, 40).await;

    assert!(result.is_ok());
    assert!(result.unwrap());
    let row = resource_repo.get(1, 1).await?.unwrap();
    assert_eq!(row.amount, 60);

    Ok(())
}

/// Expect the exact balance to be spendable down to zero
#[tokio::test]
async fn decrements_to_zero() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_item(1, 15003, 1)
        .build()
        .await?;

    let item_repo = ItemRepository::new(&test.db);

    assert!(item_repo.decrement_if_enough(1, 15003, 1).await?);
    assert_eq!(item_repo.get(1, 15003).await?.unwrap().count, 0);

    Ok(())
}

/// Expect Ok(false) and an untouched row when the balance is short
#[tokio::test]
async fn refuses_when_balance_is_short() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_resource(1, 2, 5)
        .build()
        .await?;

    let resource_repo = ResourceRepository::new(&test.db);
    let result = resource_repo.decrement_if_enough(1, 2, 6).await;

    assert!(result.is_ok());
    assert!(!result.unwrap());
    assert_eq!(resource_repo.get(1, 2).await?.unwrap().amount, 5);

    Ok(())
}

/// Expect Ok(false) without creating a row when the commander never held the key
#[tokio::test]
async fn refuses_when_row_is_missing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let equipment_repo = EquipmentRepository::new(&test.db);

    assert!(!equipment_repo.decrement_if_enough(1, 2001, 1).await?);
    assert!(equipment_repo.get(1, 2001).await?.is_none());

    Ok(())
}

/// Expect a spend against one commander to leave another commander's row alone
#[tokio::test]
async fn only_touches_owning_commander() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_commander(2)
        .with_misc_item(1, 42, 10)
        .with_misc_item(2, 42, 10)
        .build()
        .await?;

    let misc_repo = MiscItemRepository::new(&test.db);

    assert!(misc_repo.decrement_if_enough(1, 42, 10).await?);
    assert_eq!(misc_repo.get(1, 42).await?.unwrap().data, 0);
    assert_eq!(misc_repo.get(2, 42).await?.unwrap().data, 10);

    Ok(())
}
