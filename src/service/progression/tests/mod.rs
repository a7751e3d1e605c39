
use chrono::{Duration, NaiveDateTime, Utc};
use dockyard_test_utils::prelude::*;

use super::*;
use crate::{error::ErrorKind, service::CommanderService, util::time::FixedClock};

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn class(room_id: i32, ship_id: i32, finish_time: NaiveDateTime) -> NewSkillClass {
    NewSkillClass {
        room_id,
        ship_id,
        skill_pos: 1,
        skill_id: 1011,
        start_time: finish_time - Duration::hours(2),
        finish_time,
        exp: 300,
    }
}
