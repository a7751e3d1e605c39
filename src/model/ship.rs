use crate::model::{db::OwnedShipModel, template::ShipTemplate};

/// An owned ship together with its resolved template, as held in the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedShipEntry {
    pub ship: OwnedShipModel,
    /// `None` when the template id has no config document.
    pub template: Option<ShipTemplate>,
}

impl OwnedShipEntry {
    pub fn new(ship: OwnedShipModel, template: Option<ShipTemplate>) -> Self {
        Self { ship, template }
    }

    pub fn id(&self) -> i32 {
        self.ship.id
    }
}

/// One slot of a secretary list: which ship sits there and which phantom is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretaryUpdate {
    pub ship_id: i32,
    pub phantom_id: i32,
}

impl SecretaryUpdate {
    pub fn new(ship_id: i32, phantom_id: i32) -> Self {
        Self {
            ship_id,
            phantom_id,
        }
    }
}

/// Total payout of a retirement batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetireReward {
    pub coins: u32,
    pub medals: u32,
    pub specialized_cores: u32,
}

impl RetireReward {
    pub fn is_empty(&self) -> bool {
        self.coins == 0 && self.medals == 0 && self.specialized_cores == 0
    }
}

/// Coins paid for retiring a ship of the given hull type.
pub fn retire_coins(ship_type: i32) -> Option<u32> {
    let coins = match ship_type {
        1 => 12,
        2 => 14,
        3 => 18,
        4 => 22,
        5 => 26,
        6 | 7 => 16,
        8 => 0,
        10 => 25,
        12 | 13 => 13,
        17 => 10,
        18 => 19,
        19 => 11,
        _ => return None,
    };
    Some(coins)
}

/// Medals and specialized cores paid for retiring a ship of the given rarity.
pub fn retire_medals(rarity: i32) -> Option<(u32, u32)> {
    let payout = match rarity {
        2 => (0, 0),
        3 => (1, 0),
        4 => (4, 0),
        5 => (10, 0),
        6 => (30, 500),
        _ => return None,
    };
    Some(payout)
}
