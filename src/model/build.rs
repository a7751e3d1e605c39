use chrono::NaiveDateTime;

use crate::model::db::BuildModel;

/// Seconds until the build is ready, never negative.
pub fn remaining_seconds(build: &BuildModel, now: NaiveDateTime) -> i64 {
    (build.finishes_at - now).num_seconds().max(0)
}

pub fn is_ready(build: &BuildModel, now: NaiveDateTime) -> bool {
    build.finishes_at <= now
}

/// Rarity drawn for a roll in `1..=100`: 7% rarity 5, 12% rarity 4, 51% rarity 3, else 2.
pub fn rarity_for_roll(roll: u32) -> i32 {
    match roll {
        0..=7 => 5,
        8..=19 => 4,
        20..=70 => 3,
        _ => 2,
    }
}
