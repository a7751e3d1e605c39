use super::*;

/// Expect clearing then setting to leave only the chosen secretaries flagged, phantom ids reset
#[tokio::test]
async fn replaces_secretaries() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    let old = test.ledger().insert_ship(1, 101).await?;
    let new = test.ledger().insert_ship(1, 102).await?;

    let ship_repo = ShipRepository::new(&test.db);
    ship_repo.set_secretary(1, old.id, 1, 3).await?;

    assert_eq!(ship_repo.clear_secretaries(1).await?, 1);
    assert_eq!(ship_repo.set_secretary(1, new.id, 1, 0).await?, 1);

    let old = ship_repo.get_live(1, old.id).await?.unwrap();
    let new = ship_repo.get_live(1, new.id).await?.unwrap();
    assert!(!old.is_secretary);
    assert_eq!(old.secretary_position, None);
    assert_eq!(old.secretary_phantom_id, 0);
    assert!(new.is_secretary);
    assert_eq!(new.secretary_position, Some(1));

    Ok(())
}

/// Expect lock changes to apply to live ships only
#[tokio::test]
async fn locks_live_ship() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    let ship = test.ledger().insert_ship(1, 101).await?;

    let ship_repo = ShipRepository::new(&test.db);

    assert_eq!(ship_repo.set_locked(1, ship.id, true).await?, 1);
    assert!(ship_repo.get_live(1, ship.id).await?.unwrap().is_locked);

    ship_repo.tombstone_many(1, &[ship.id], now()).await?;
    assert_eq!(ship_repo.set_locked(1, ship.id, false).await?, 0);

    Ok(())
}
