use super::*;

/// Expect the locked row inside a transaction and its deletion to free the room
#[tokio::test]
async fn lock_then_delete_frees_room() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    test.ledger()
        .insert_skill_class(1, 2, 10, now() - Duration::minutes(1), 150)
        .await?;

    let txn = test.db.begin().await?;
    let skill_repo = SkillClassRepository::new(&txn);
    let locked = skill_repo.lock(1, 2).await?;
    assert_eq!(locked.map(|c| c.exp), Some(150));
    assert_eq!(skill_repo.delete(1, 2).await?, 1);
    txn.commit().await?;

    let skill_repo = SkillClassRepository::new(&test.db);
    assert!(skill_repo.lock(1, 2).await?.is_none());
    assert!(skill_repo.insert(1, &class(2, 11)).await.is_ok());

    Ok(())
}

/// Expect deleting an empty room to report zero rows
#[tokio::test]
async fn delete_empty_room() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let skill_repo = SkillClassRepository::new(&test.db);

    assert_eq!(skill_repo.delete(1, 5).await?, 0);

    Ok(())
}
