use dockyard::{
    constant::COIN_RESOURCE_ID, error::rule::RuleError, service::ShipService,
};

use super::*;

/// Expect one ship of an unknown type to block the entire batch
#[tokio::test]
async fn unknown_type_blocks_batch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_ship_template(101, 4, 1, 1, 60)
        .with_ship_template(102, 5, 2, 1, 60)
        .with_ship_template(999, 3, 99, 1, 60)
        .build()
        .await?;
    let mut ids = Vec::new();
    for template_id in [101, 102, 999] {
        ids.push(test.ledger().insert_ship(1, template_id).await?.id);
    }
    let mut commander = load(&test, 1).await.unwrap();

    let ship_service = ShipService::new(&test.db);
    let result = ship_service.retire_ships(&mut commander, &ids).await;

    assert!(matches!(
        result,
        Err(Error::RuleError(RuleError::UnknownShipType { ship_type: 99, .. }))
    ));
    let reloaded = load(&test, 1).await.unwrap();
    assert_eq!(reloaded.ships.len(), 3);
    assert_eq!(reloaded.resource_count(COIN_RESOURCE_ID), 0);

    Ok(())
}
