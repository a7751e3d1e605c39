use std::collections::HashMap;

use chrono::Duration;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    constant::{
        COIN_RESOURCE_ID, MEDAL_ITEM_ID, PROPOSE_ITEM_ID, RENAME_COOLDOWN_DAYS,
        SPECIALIZED_CORE_ITEM_ID,
    },
    data::ShipRepository,
    error::{rule::RuleError, Error},
    model::{
        cache::CacheUpdate,
        commander::Commander,
        db::OwnedShipModel,
        ship::{retire_coins, retire_medals, RetireReward, SecretaryUpdate},
    },
    service::ledger::Ledger,
    util::time::{Clock, SystemClock},
};

pub struct ShipService<'a, K: Clock = SystemClock> {
    db: &'a DatabaseConnection,
    clock: K,
}

impl<'a> ShipService<'a> {
    /// Creates a new instance of [`ShipService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_clock(db, SystemClock)
    }
}

impl<'a, K: Clock> ShipService<'a, K> {
    pub fn with_clock(db: &'a DatabaseConnection, clock: K) -> Self {
        Self { db, clock }
    }

    /// Retire a batch of ships and pay coins, medals and specialized cores for them.
    ///
    /// Every ship is validated before anything is written: one unknown ID, type or rarity
    /// rejects the whole batch. Payouts and tombstones then commit together.
    ///
    /// # Returns
    /// - `Ok(RetireReward)` - Total paid for the batch
    /// - `Err(Error::NotFound)` - A ship is not owned by the commander
    /// - `Err(Error::RuleError)` - A ship has no template, or an unknown type or rarity
    pub async fn retire_ships(
        &self,
        commander: &mut Commander,
        ship_ids: &[i32],
    ) -> Result<RetireReward, Error> {
        let mut ship_ids = ship_ids.to_vec();
        ship_ids.sort_unstable();
        ship_ids.dedup();

        let reward = retire_reward(commander, &ship_ids)?;

        let mut updates = Vec::with_capacity(4);
        let txn = self.db.begin().await?;
        let ledger = Ledger::new(&txn, commander.id());
        if reward.coins > 0 {
            updates.push(ledger.add_resource(COIN_RESOURCE_ID, reward.coins).await?);
        }
        if reward.medals > 0 {
            updates.push(ledger.add_item(MEDAL_ITEM_ID, reward.medals).await?);
        }
        if reward.specialized_cores > 0 {
            updates.push(
                ledger
                    .add_item(SPECIALIZED_CORE_ITEM_ID, reward.specialized_cores)
                    .await?,
            );
        }
        let retired = ShipRepository::new(&txn)
            .tombstone_many(commander.id(), &ship_ids, self.clock.now())
            .await?;
        if retired != ship_ids.len() as u64 {
            return Err(Error::NotFound(format!(
                "{} of {} ships to retire for commander {}",
                ship_ids.len() as u64 - retired,
                ship_ids.len(),
                commander.id()
            )));
        }
        txn.commit().await?;

        let retired_count = ship_ids.len();
        updates.push(CacheUpdate::ShipsRemoved(ship_ids));
        commander.apply_all(updates);

        tracing::info!(
            "Commander {} retired {} ships for {} coins, {} medals, {} cores",
            commander.id(),
            retired_count,
            reward.coins,
            reward.medals,
            reward.specialized_cores
        );

        Ok(reward)
    }

    /// Propose to a ship, spending one promise ring.
    pub async fn propose_ship(
        &self,
        commander: &mut Commander,
        ship_id: i32,
    ) -> Result<OwnedShipModel, Error> {
        let Some(entry) = commander.ship(ship_id) else {
            return Err(Error::NotFound(format!("ship {}", ship_id)));
        };
        if entry.ship.propose {
            return Err(RuleError::AlreadyProposed(ship_id).into());
        }
        let ship = entry.ship.clone();
        let store = commander.item_store(PROPOSE_ITEM_ID);

        let txn = self.db.begin().await?;
        let spend = Ledger::new(&txn, commander.id())
            .consume_item(store, PROPOSE_ITEM_ID, 1)
            .await?;
        let flipped = ShipRepository::new(&txn)
            .set_proposed(commander.id(), ship_id)
            .await?;
        if flipped == 0 {
            return Err(RuleError::AlreadyProposed(ship_id).into());
        }
        txn.commit().await?;

        let ship = OwnedShipModel {
            propose: true,
            ..ship
        };
        commander.apply_all([spend, CacheUpdate::ShipUpdated(ship.clone())]);

        tracing::info!("Commander {} proposed to ship {}", commander.id(), ship_id);

        Ok(ship)
    }

    /// Rename a proposed ship. A rename is refused while the stored cooldown timestamp is
    /// less than the cooldown window in the past, and pushes that timestamp to now plus the
    /// window.
    pub async fn rename_ship(
        &self,
        commander: &mut Commander,
        ship_id: i32,
        name: &str,
    ) -> Result<OwnedShipModel, Error> {
        let now = self.clock.now();
        let cooldown = Duration::days(RENAME_COOLDOWN_DAYS);

        let Some(entry) = commander.ship(ship_id) else {
            return Err(Error::NotFound(format!("ship {}", ship_id)));
        };
        if !entry.ship.propose {
            return Err(RuleError::NotProposed(ship_id).into());
        }
        if now - entry.ship.change_name_timestamp < cooldown {
            return Err(RuleError::RenameCooldown {
                ship_id,
                available_at: entry.ship.change_name_timestamp + cooldown,
            }
            .into());
        }
        let ship = entry.ship.clone();

        let cooldown_until = now + cooldown;
        let renamed = ShipRepository::new(self.db)
            .rename(commander.id(), ship_id, name, cooldown_until)
            .await?;
        if renamed == 0 {
            return Err(Error::NotFound(format!("ship {}", ship_id)));
        }

        let ship = OwnedShipModel {
            custom_name: name.to_string(),
            change_name_timestamp: cooldown_until,
            ..ship
        };
        commander.apply(CacheUpdate::ShipUpdated(ship.clone()));

        tracing::debug!("Commander {} renamed ship {}", commander.id(), ship_id);

        Ok(ship)
    }

    pub async fn set_ship_lock(
        &self,
        commander: &mut Commander,
        ship_id: i32,
        locked: bool,
    ) -> Result<(), Error> {
        let Some(entry) = commander.ship(ship_id) else {
            return Err(Error::NotFound(format!("ship {}", ship_id)));
        };
        let ship = entry.ship.clone();

        let updated = ShipRepository::new(self.db)
            .set_locked(commander.id(), ship_id, locked)
            .await?;
        if updated == 0 {
            return Err(Error::NotFound(format!("ship {}", ship_id)));
        }

        commander.apply(CacheUpdate::ShipUpdated(OwnedShipModel {
            is_locked: locked,
            ..ship
        }));

        Ok(())
    }

    /// Replace the secretary list. The ship at index `i` gets secretary position `i`.
    ///
    /// A ship listed more than once keeps the position and phantom of its last slot.
    pub async fn update_secretaries(
        &self,
        commander: &mut Commander,
        secretaries: &[SecretaryUpdate],
    ) -> Result<(), Error> {
        if let Some(missing) = secretaries
            .iter()
            .find(|s| commander.ship(s.ship_id).is_none())
        {
            return Err(Error::NotFound(format!("ship {}", missing.ship_id)));
        }

        // ship id -> (position, phantom id), later slots overwrite earlier ones
        let mut slots = HashMap::new();
        for (position, secretary) in secretaries.iter().enumerate() {
            slots.insert(secretary.ship_id, (position as i32, secretary.phantom_id));
        }

        let txn = self.db.begin().await?;
        let ship_repo = ShipRepository::new(&txn);
        ship_repo.clear_secretaries(commander.id()).await?;
        for (position, secretary) in secretaries.iter().enumerate() {
            let updated = ship_repo
                .set_secretary(
                    commander.id(),
                    secretary.ship_id,
                    position as i32,
                    secretary.phantom_id,
                )
                .await?;
            if updated == 0 {
                return Err(Error::NotFound(format!("ship {}", secretary.ship_id)));
            }
        }
        txn.commit().await?;

        let mut updates = Vec::new();
        for entry in commander.ships.iter() {
            let slot = slots.get(&entry.ship.id).copied();
            if !entry.ship.is_secretary && slot.is_none() {
                continue;
            }
            updates.push(CacheUpdate::ShipUpdated(OwnedShipModel {
                is_secretary: slot.is_some(),
                secretary_position: slot.map(|(position, _)| position),
                secretary_phantom_id: slot.map(|(_, phantom_id)| phantom_id).unwrap_or(0),
                ..entry.ship.clone()
            }));
        }
        commander.apply_all(updates);

        Ok(())
    }
}

/// Sum the payout for `ship_ids`, failing on the first ship that cannot be retired.
fn retire_reward(commander: &Commander, ship_ids: &[i32]) -> Result<RetireReward, Error> {
    let mut reward = RetireReward::default();

    for ship_id in ship_ids {
        let Some(entry) = commander.ship(*ship_id) else {
            return Err(Error::NotFound(format!("ship {}", ship_id)));
        };
        let Some(template) = &entry.template else {
            return Err(RuleError::MissingShipTemplate {
                ship_id: *ship_id,
                template_id: entry.ship.ship_id,
            }
            .into());
        };

        let Some(coins) = retire_coins(template.ship_type) else {
            return Err(RuleError::UnknownShipType {
                ship_id: *ship_id,
                ship_type: template.ship_type,
            }
            .into());
        };
        let Some((medals, cores)) = retire_medals(template.rarity) else {
            return Err(RuleError::UnknownShipRarity {
                ship_id: *ship_id,
                rarity: template.rarity,
            }
            .into());
        };

        reward.coins += coins;
        reward.medals += medals;
        reward.specialized_cores += cores;
    }

    Ok(reward)
}

#[cfg(test)]
mod tests;
