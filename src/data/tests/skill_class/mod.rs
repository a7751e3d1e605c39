mod get_or_create_ship_skill;
mod insert;
mod lock;

use super::*;

fn class(room_id: i32, ship_id: i32) -> NewSkillClass {
    let start = now();
    NewSkillClass {
        room_id,
        ship_id,
        skill_pos: 1,
        skill_id: 1011,
        start_time: start,
        finish_time: start + Duration::hours(2),
        exp: 300,
    }
}
