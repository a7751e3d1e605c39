//! Game identifiers and limits the ledger depends on.

/// Resource id of gold coins.
pub const COIN_RESOURCE_ID: i32 = 1;

/// Consumed to finish a build immediately.
pub const QUICK_FINISHER_ITEM_ID: i32 = 15003;
/// Retirement medal.
pub const MEDAL_ITEM_ID: i32 = 15001;
/// Consumed by a proposal.
pub const PROPOSE_ITEM_ID: i32 = 15006;
/// Granted when retiring top rarity ships.
pub const SPECIALIZED_CORE_ITEM_ID: i32 = 59010;

pub const EXCHANGE_COUNT_CAP: i32 = 400;
pub const COMMANDER_LEVEL_CAP: i32 = 120;
pub const RENAME_COOLDOWN_DAYS: i64 = 30;

/// Config category holding ship templates keyed by template id.
pub const SHIP_TEMPLATE_CATEGORY: &str = "ShareCfg/ship_data_template.json";

pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
