use dockyard::{
    constant::QUICK_FINISHER_ITEM_ID,
    data::BuildRepository,
    error::ledger::LedgerError,
    service::BuildService,
};

use super::*;

/// Expect create, quick finish and consume to leave one ship and no build
#[tokio::test]
async fn build_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_item(1, QUICK_FINISHER_ITEM_ID, 1)
        .with_ship_template(102, 2, 1, 1, 600)
        .with_ship_template(103, 3, 1, 1, 600)
        .with_ship_template(104, 4, 1, 1, 600)
        .with_ship_template(105, 5, 1, 1, 600)
        .build()
        .await?;
    let mut commander = load(&test, 1).await.unwrap();

    let build_service = BuildService::new(&test.db);
    let (build, _) = build_service.create_build(&mut commander, 1).await.unwrap();
    let early = build_service
        .consume(&mut commander, build.id, build.ship_id)
        .await;
    assert!(early.is_err());

    build_service
        .quick_finish(&mut commander, build.id)
        .await
        .unwrap();
    let result = build_service
        .consume(&mut commander, build.id, build.ship_id)
        .await;

    assert!(result.is_ok());
    let reloaded = load(&test, 1).await.unwrap();
    assert!(reloaded.builds.is_empty());
    assert_eq!(reloaded.ships.len(), 1);
    assert_eq!(reloaded.item_count(QUICK_FINISHER_ITEM_ID), 0);
    assert_eq!(reloaded.row.exchange_count, 0);

    Ok(())
}

/// Expect a failed quick finish to leave the item count and finish time as they were
#[tokio::test]
async fn quick_finish_without_item_changes_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    let finishes_at = now() + Duration::hours(1);
    let build = test.ledger().insert_build(1, 101, finishes_at).await?;
    let mut commander = load(&test, 1).await.unwrap();

    let build_service = BuildService::new(&test.db);
    let result = build_service.quick_finish(&mut commander, build.id).await;

    assert!(matches!(
        result,
        Err(Error::LedgerError(LedgerError::InsufficientItem { .. }))
    ));
    let stored = BuildRepository::new(&test.db).get(build.id).await?.unwrap();
    assert_eq!(stored.finishes_at, finishes_at);

    Ok(())
}
