use super::*;

/// Expect builds in id order, windowed by offset and limit
#[tokio::test]
async fn returns_window_in_id_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    let mut ids = Vec::new();
    for ship_id in 101..106 {
        ids.push(test.ledger().insert_build(1, ship_id, now()).await?.id);
    }

    let build_repo = BuildRepository::new(&test.db);
    let result = build_repo.list_range(1, 1, 3).await;

    assert!(result.is_ok());
    let window: Vec<i32> = result.unwrap().iter().map(|b| b.id).collect();
    assert_eq!(window, ids[1..4].to_vec());
    assert_eq!(build_repo.list_by_builder(1).await?.len(), 5);

    Ok(())
}

/// Expect an empty window past the end
#[tokio::test]
async fn window_past_end_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    test.ledger().insert_build(1, 101, now()).await?;

    let build_repo = BuildRepository::new(&test.db);

    assert!(build_repo.list_range(1, 5, 10).await?.is_empty());

    Ok(())
}
