mod build;
mod commander;
mod counter;
mod ship;
mod skill_class;
mod storeup;

use chrono::{Duration, NaiveDateTime, Utc};
use dockyard_test_utils::prelude::*;
use sea_orm::{EntityTrait, TransactionTrait};

use super::*;

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
