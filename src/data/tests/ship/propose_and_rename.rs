use super::*;

/// Expect the proposal flag to flip exactly once
#[tokio::test]
async fn set_proposed_is_guarded() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    let ship = test.ledger().insert_ship(1, 101).await?;

    let ship_repo = ShipRepository::new(&test.db);

    assert_eq!(ship_repo.set_proposed(1, ship.id).await?, 1);
    assert_eq!(ship_repo.set_proposed(1, ship.id).await?, 0);
    assert!(ship_repo.get_live(1, ship.id).await?.unwrap().propose);

    Ok(())
}

/// Expect rename to store the name and the next allowed rename time
#[tokio::test]
async fn renames_proposed_ship() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    let ship = test
        .ledger()
        .insert_proposed_ship(1, 101, NaiveDateTime::UNIX_EPOCH)
        .await?;
    let cooldown_until = now() + Duration::days(30);

    let ship_repo = ShipRepository::new(&test.db);
    let result = ship_repo.rename(1, ship.id, "Stella", cooldown_until).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 1);
    let renamed = ship_repo.get_live(1, ship.id).await?.unwrap();
    assert_eq!(renamed.custom_name, "Stella");
    assert_eq!(renamed.change_name_timestamp, cooldown_until);

    Ok(())
}

/// Expect rename of an unproposed ship to touch nothing
#[tokio::test]
async fn rename_requires_proposal() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    let ship = test.ledger().insert_ship(1, 101).await?;

    let ship_repo = ShipRepository::new(&test.db);

    assert_eq!(ship_repo.rename(1, ship.id, "Stella", now()).await?, 0);
    assert_eq!(ship_repo.get_live(1, ship.id).await?.unwrap().custom_name, "");

    Ok(())
}
