use dockyard::service::LedgerService;

use super::*;

/// Expect the legacy resource id to behave exactly like its canonical id
#[tokio::test]
async fn legacy_resource_id_is_transparent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_commander(2)
        .build()
        .await?;
    let mut legacy = load(&test, 1).await.unwrap();
    let mut canonical = load(&test, 2).await.unwrap();

    let ledger_service = LedgerService::new(&test.db);
    ledger_service.add_resource(&mut legacy, 14, 30).await.unwrap();
    ledger_service.add_resource(&mut canonical, 4, 30).await.unwrap();
    ledger_service
        .consume_resource(&mut legacy, 4, 10)
        .await
        .unwrap();
    ledger_service
        .consume_resource(&mut canonical, 14, 10)
        .await
        .unwrap();

    let legacy = load(&test, 1).await.unwrap();
    let canonical = load(&test, 2).await.unwrap();
    for view in [&legacy, &canonical] {
        assert_eq!(view.resource_count(4), 20);
        assert_eq!(view.resource_count(14), 20);
        assert_eq!(view.resources.len(), 1);
    }

    Ok(())
}
