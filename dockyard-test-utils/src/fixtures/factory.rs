//! Factory functions for in-memory row models.

use chrono::{NaiveDateTime, Utc};

use crate::{
    constant::TEST_ACCOUNT_ID,
    model::{BuildModel, CommanderModel, OwnedShipModel},
};

/// Create a live commander model with level 1 and no exchange history.
pub fn mock_commander_model(commander_id: i32) -> CommanderModel {
    let now = Utc::now().naive_utc();
    CommanderModel {
        commander_id,
        account_id: TEST_ACCOUNT_ID,
        name: format!("Commander {}", commander_id),
        level: 1,
        exp: 0,
        exchange_count: 0,
        last_login: now,
        created_at: now,
        deleted_at: None,
    }
}

/// Create an unlocked, unproposed ship model.
pub fn mock_ship_model(id: i32, owner_id: i32, ship_id: i32) -> OwnedShipModel {
    let now = Utc::now().naive_utc();
    OwnedShipModel {
        id,
        owner_id,
        ship_id,
        level: 1,
        intimacy: 5000,
        is_locked: false,
        is_secretary: false,
        secretary_position: None,
        secretary_phantom_id: 0,
        propose: false,
        custom_name: String::new(),
        change_name_timestamp: NaiveDateTime::UNIX_EPOCH,
        create_time: now,
        deleted_at: None,
    }
}

pub fn mock_build_model(
    id: i32,
    builder_id: i32,
    ship_id: i32,
    finishes_at: NaiveDateTime,
) -> BuildModel {
    BuildModel {
        id,
        builder_id,
        ship_id,
        pool_id: 1,
        finishes_at,
    }
}

/// Ship template document in the shape stored under the ship template category.
pub fn mock_ship_template(
    template_id: i32,
    rarity: i32,
    ship_type: i32,
    pool_id: i32,
    build_time: i64,
) -> serde_json::Value {
    serde_json::json!({
        "id": template_id,
        "name": format!("Ship {}", template_id),
        "rarity": rarity,
        "type": ship_type,
        "star": rarity.saturating_sub(1).max(1),
        "nationality": 1,
        "build_time": build_time,
        "pool_id": pool_id,
    })
}
