use sea_orm::SqlErr;

use super::*;

/// Expect a new live commander at level 1
#[tokio::test]
async fn creates_commander() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let commander_repo = CommanderRepository::new(&test.db);
    let result = commander_repo.create(7, 1000, "Tester", now()).await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.level, 1);
    assert_eq!(created.exchange_count, 0);
    assert!(commander_repo.get_live(7).await?.is_some());

    Ok(())
}

/// Expect a duplicate name to fail with a unique violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let commander_repo = CommanderRepository::new(&test.db);
    commander_repo.create(7, 1000, "Tester", now()).await?;
    let result = commander_repo.create(8, 1001, "Tester", now()).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Expect profile updates to persist and to skip missing commanders
#[tokio::test]
async fn updates_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let commander_repo = CommanderRepository::new(&test.db);
    let mut row = commander_repo.get_live(1).await?.unwrap();
    row.level = 40;
    row.exp = 1234;
    row.name = "Renamed".to_string();

    assert_eq!(commander_repo.update_profile(&row).await?, 1);
    let stored = commander_repo.get_live(1).await?.unwrap();
    assert_eq!((stored.level, stored.exp), (40, 1234));
    assert_eq!(stored.name, "Renamed");

    row.commander_id = 99;
    assert_eq!(commander_repo.update_profile(&row).await?, 0);

    Ok(())
}
