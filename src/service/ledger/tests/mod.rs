
use dockyard_test_utils::prelude::*;

use super::*;
use crate::{error::ErrorKind, service::CommanderService};

async fn load(test: &TestContext, commander_id: i32) -> Result<Commander, Error> {
    CommanderService::new(&test.db)
        .load_commander(commander_id)
        .await
}
