use super::*;

/// Expect retired ships to disappear from every live read
#[tokio::test]
async fn hides_tombstoned_ships() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    let first = test.ledger().insert_ship(1, 101).await?;
    let second = test.ledger().insert_ship(1, 102).await?;
    let third = test.ledger().insert_ship(1, 103).await?;

    let ship_repo = ShipRepository::new(&test.db);
    let result = ship_repo
        .tombstone_many(1, &[first.id, third.id], now())
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 2);
    let live: Vec<i32> = ship_repo.list_live(1).await?.iter().map(|s| s.id).collect();
    assert_eq!(live, vec![second.id]);
    assert!(ship_repo.get_live(1, first.id).await?.is_none());

    // Row is kept, only marked
    let stored = entity::prelude::OwnedShip::find_by_id(first.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(stored.deleted_at.is_some());

    Ok(())
}

/// Expect already retired and foreign ships to be skipped
#[tokio::test]
async fn skips_dead_and_foreign_ships() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_commander(2)
        .build()
        .await?;
    let mine = test.ledger().insert_ship(1, 101).await?;
    let theirs = test.ledger().insert_ship(2, 101).await?;

    let ship_repo = ShipRepository::new(&test.db);
    assert_eq!(ship_repo.tombstone_many(1, &[mine.id], now()).await?, 1);

    let result = ship_repo
        .tombstone_many(1, &[mine.id, theirs.id], now())
        .await?;

    assert_eq!(result, 0);
    assert!(ship_repo.get_live(2, theirs.id).await?.is_some());

    Ok(())
}

/// Expect an empty id list to be a no-op
#[tokio::test]
async fn empty_list_is_noop() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let ship_repo = ShipRepository::new(&test.db);

    assert_eq!(ship_repo.tombstone_many(1, &[], now()).await?, 0);

    Ok(())
}
