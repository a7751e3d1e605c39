use super::*;

/// Expect a level 1 row with no exp when the skill was never trained
#[tokio::test]
async fn creates_default_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let skill_repo = SkillClassRepository::new(&test.db);
    let result = skill_repo.get_or_create_ship_skill(1, 10, 1, 1011).await;

    assert!(result.is_ok());
    let skill = result.unwrap();
    assert_eq!(skill.level, 1);
    assert_eq!(skill.exp, 0);
    assert_eq!(skill.skill_id, 1011);

    Ok(())
}

/// Expect an existing row to be returned unchanged
#[tokio::test]
async fn keeps_existing_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    test.ledger().insert_ship_skill(1, 10, 1, 1011, 6).await?;

    let skill_repo = SkillClassRepository::new(&test.db);
    let skill = skill_repo.get_or_create_ship_skill(1, 10, 1, 1011).await?;

    assert_eq!(skill.level, 6);
    assert_eq!(
        entity::prelude::CommanderShipSkill::find().all(&test.db).await?.len(),
        1
    );

    Ok(())
}

/// Expect exp to accumulate on the skill row
#[tokio::test]
async fn adds_exp() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    test.ledger().insert_ship_skill(1, 10, 2, 2022, 1).await?;

    let skill_repo = SkillClassRepository::new(&test.db);
    assert_eq!(skill_repo.add_ship_skill_exp(1, 10, 2, 120).await?, 1);
    assert_eq!(skill_repo.add_ship_skill_exp(1, 10, 2, 30).await?, 1);

    let skill = skill_repo.get_ship_skill(1, 10, 2).await?.unwrap();
    assert_eq!(skill.exp, 150);

    Ok(())
}
