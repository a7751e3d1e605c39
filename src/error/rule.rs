use chrono::NaiveDateTime;
use thiserror::Error;

/// Business rule violations. Raised before any write so nothing is partially applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Ship {ship_id} has unknown type {ship_type}")]
    UnknownShipType { ship_id: i32, ship_type: i32 },
    #[error("Ship {ship_id} has unknown rarity {rarity}")]
    UnknownShipRarity { ship_id: i32, rarity: i32 },
    #[error("Ship {ship_id} has no template loaded for template ID {template_id}")]
    MissingShipTemplate { ship_id: i32, template_id: i32 },
    #[error("Ship {0} is already proposed")]
    AlreadyProposed(i32),
    #[error("Ship {0} must be proposed before it can be renamed")]
    NotProposed(i32),
    #[error("Ship {ship_id} cannot be renamed until {available_at}")]
    RenameCooldown {
        ship_id: i32,
        available_at: NaiveDateTime,
    },
    #[error("Build {build_id} finishes in {remaining_seconds}s")]
    BuildNotReady {
        build_id: i32,
        remaining_seconds: i64,
    },
    #[error("Build {build_id} produces template {expected}, not {requested}")]
    BuildTemplateMismatch {
        build_id: i32,
        expected: i32,
        requested: i32,
    },
    #[error("Award index {0} is not a valid tier, tiers start at 1")]
    InvalidAwardIndex(i32),
    #[error("Skill class in room {room_id} finishes in {remaining_seconds}s")]
    SkillClassNotFinished {
        room_id: i32,
        remaining_seconds: i64,
    },
}
