use dockyard::{
    data::{NewSkillClass, ResourceRepository},
    error::ErrorKind,
    service::{LedgerService, ProgressionService},
};

use super::*;

/// Expect exactly one of several racing spends to win when only one fits the balance
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_spends_never_overdraw() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .with_resource(1, 1, 10)
        .build()
        .await?;
    let commander = load(&test, 1).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let db = test.db.clone();
        let mut session = commander.clone();
        handles.push(tokio::spawn(async move {
            LedgerService::new(&db)
                .consume_resource(&mut session, 1, 7)
                .await
        }));
    }

    let mut succeeded = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => succeeded += 1,
            Err(e) => assert_eq!(e.kind(), ErrorKind::InsufficientBalance),
        }
    }

    assert_eq!(succeeded, 1);
    let row = ResourceRepository::new(&test.db).get(1, 1).await?.unwrap();
    assert_eq!(row.amount, 3);

    Ok(())
}

/// Expect one winner and only conflicts when many sessions claim the same skill room
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_room_claims_have_one_winner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_commander(1)
        .build()
        .await?;
    let start = now();

    let mut handles = Vec::new();
    for ship_id in 1..=6 {
        let db = test.db.clone();
        let class = NewSkillClass {
            room_id: 1,
            ship_id,
            skill_pos: 1,
            skill_id: 1011,
            start_time: start,
            finish_time: start + Duration::hours(1),
            exp: 100,
        };
        handles.push(tokio::spawn(async move {
            ProgressionService::new(&db)
                .claim_skill_room(1, &class)
                .await
        }));
    }

    let mut winners = Vec::new();
    for handle in handles {
        match handle.await.unwrap() {
            Ok(class) => winners.push(class.ship_id),
            Err(e) => assert!(matches!(e, Error::Conflict(_))),
        }
    }

    assert_eq!(winners.len(), 1);
    let classes = ProgressionService::new(&test.db)
        .list_skill_classes(1)
        .await
        .unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].ship_id, winners[0]);

    Ok(())
}
