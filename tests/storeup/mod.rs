use dockyard::service::{AwardGrant, ProgressionService};

use super::*;

/// Expect racing claims of one tier to pay out once and the index to move by one
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_claims_pay_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    let commander = load(&test, 1).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..5 {
        let db = test.db.clone();
        let mut session = commander.clone();
        handles.push(tokio::spawn(async move {
            ProgressionService::new(&db)
                .claim_storeup_award(
                    &mut session,
                    7,
                    1,
                    AwardGrant::Resource {
                        resource_id: 2,
                        amount: 50,
                    },
                )
                .await
        }));
    }

    let mut paid = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            paid += 1;
        }
    }

    assert_eq!(paid, 1);
    let reloaded = load(&test, 1).await.unwrap();
    assert_eq!(reloaded.resource_count(2), 50);
    let progression_service = ProgressionService::new(&test.db);
    assert_eq!(
        progression_service.last_storeup_award_index(1, 7).await.unwrap(),
        1
    );

    Ok(())
}

/// Expect the index to never move backward or skip a tier
#[tokio::test]
async fn index_is_monotonic() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;

    let progression_service = ProgressionService::new(&test.db);
    let mut last = 0;
    for target in [1, 1, 3, 2, 1, 3, 5, 4] {
        let advanced = progression_service
            .try_advance_storeup_award(1, 7, target)
            .await
            .unwrap();
        let index = progression_service
            .last_storeup_award_index(1, 7)
            .await
            .unwrap();

        assert_eq!(advanced, target == last + 1);
        assert!(index >= last);
        last = index;
    }
    assert_eq!(last, 4);

    Ok(())
}
