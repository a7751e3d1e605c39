use sea_orm::SqlErr;

use super::*;

/// Expect the class to occupy the free room
#[tokio::test]
async fn claims_free_room() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let skill_repo = SkillClassRepository::new(&test.db);
    let result = skill_repo.insert(1, &class(1, 10)).await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.room_id, 1);
    assert_eq!(created.ship_id, 10);
    assert_eq!(skill_repo.list(1).await?.len(), 1);

    Ok(())
}

/// Expect a unique violation when the room is already taken
#[tokio::test]
async fn rejects_taken_room() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let skill_repo = SkillClassRepository::new(&test.db);
    skill_repo.insert(1, &class(1, 10)).await?;
    let result = skill_repo.insert(1, &class(1, 11)).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    let rooms = skill_repo.list(1).await?;
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].ship_id, 10);

    Ok(())
}

/// Expect the same room number to be independent between commanders
#[tokio::test]
async fn rooms_are_per_commander() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_commander(2)
        .build()
        .await?;

    let skill_repo = SkillClassRepository::new(&test.db);

    assert!(skill_repo.insert(1, &class(1, 10)).await.is_ok());
    assert!(skill_repo.insert(2, &class(1, 20)).await.is_ok());

    Ok(())
}
