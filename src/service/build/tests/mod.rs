
use chrono::{NaiveDateTime, Utc};
use dockyard_test_utils::prelude::*;

use super::*;
use crate::{
    data::ShipRepository,
    error::{ledger::LedgerError, ErrorKind},
    service::CommanderService,
    util::time::FixedClock,
};

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

async fn load(test: &TestContext, commander_id: i32) -> Result<Commander, Error> {
    CommanderService::new(&test.db)
        .load_commander(commander_id)
        .await
}
