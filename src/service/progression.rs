//! Progression trackers that must be claimed at most once under concurrency.
//!
//! Storeup awards advance through a compare-and-set on the stored index; skill rooms are
//! claimed by inserting under the room's primary key. In both cases the database decides the
//! winner and losers get [`Error::Conflict`].

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{NewSkillClass, SkillClassRepository, StoreupAwardRepository},
    error::{rule::RuleError, Error},
    model::{
        commander::Commander,
        db::{ShipSkillModel, SkillClassModel, StoreupProgressModel},
    },
    service::ledger::Ledger,
    util::time::{Clock, SystemClock},
};

/// Reward paid out when a storeup award is claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardGrant {
    Resource { resource_id: i32, amount: u32 },
    Item { item_id: i32, amount: u32 },
}

pub struct ProgressionService<'a, K: Clock = SystemClock> {
    db: &'a DatabaseConnection,
    clock: K,
}

impl<'a> ProgressionService<'a> {
    /// Creates a new instance of [`ProgressionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_clock(db, SystemClock)
    }
}

impl<'a, K: Clock> ProgressionService<'a, K> {
    pub fn with_clock(db: &'a DatabaseConnection, clock: K) -> Self {
        Self { db, clock }
    }

    /// Advance the storeup award index from `target - 1` to `target`.
    ///
    /// # Returns
    /// - `Ok(true)` - This caller moved the index and should pay the reward
    /// - `Ok(false)` - The tier was already claimed or the previous tier never was
    /// - `Err(Error::RuleError)` - `target` is not a positive tier
    pub async fn try_advance_storeup_award(
        &self,
        commander_id: i32,
        storeup_id: i32,
        target: i32,
    ) -> Result<bool, Error> {
        if target <= 0 {
            return Err(RuleError::InvalidAwardIndex(target).into());
        }

        let advanced = StoreupAwardRepository::new(self.db)
            .try_advance(commander_id, storeup_id, target)
            .await?;

        tracing::debug!(
            "Storeup {} award {} for commander {}: advanced = {}",
            storeup_id,
            target,
            commander_id,
            advanced
        );

        Ok(advanced)
    }

    /// Advance the award index and pay the reward in one transaction.
    ///
    /// A caller that loses the race gets [`Error::Conflict`] and nothing is granted.
    pub async fn claim_storeup_award(
        &self,
        commander: &mut Commander,
        storeup_id: i32,
        target: i32,
        grant: AwardGrant,
    ) -> Result<(), Error> {
        if target <= 0 {
            return Err(RuleError::InvalidAwardIndex(target).into());
        }

        let txn = self.db.begin().await?;
        let advanced = StoreupAwardRepository::new(&txn)
            .try_advance(commander.id(), storeup_id, target)
            .await?;
        if !advanced {
            return Err(Error::Conflict(format!(
                "storeup {} award {} for commander {}",
                storeup_id,
                target,
                commander.id()
            )));
        }

        let ledger = Ledger::new(&txn, commander.id());
        let update = match grant {
            AwardGrant::Resource {
                resource_id,
                amount,
            } => ledger.add_resource(resource_id, amount).await?,
            AwardGrant::Item { item_id, amount } => ledger.add_item(item_id, amount).await?,
        };
        txn.commit().await?;

        commander.apply(update);

        tracing::info!(
            "Commander {} claimed storeup {} award {}",
            commander.id(),
            storeup_id,
            target
        );

        Ok(())
    }

    pub async fn last_storeup_award_index(
        &self,
        commander_id: i32,
        storeup_id: i32,
    ) -> Result<i32, Error> {
        Ok(StoreupAwardRepository::new(self.db)
            .last_index(commander_id, storeup_id)
            .await?)
    }

    pub async fn list_storeup_award_progress(
        &self,
        commander_id: i32,
    ) -> Result<Vec<StoreupProgressModel>, Error> {
        Ok(StoreupAwardRepository::new(self.db)
            .list(commander_id)
            .await?)
    }

    /// Overwrite award progress, bypassing the one-step rule. Administrative use only.
    pub async fn set_storeup_award_index(
        &self,
        commander_id: i32,
        storeup_id: i32,
        index: i32,
    ) -> Result<(), Error> {
        if index < 0 {
            return Err(RuleError::InvalidAwardIndex(index).into());
        }

        StoreupAwardRepository::new(self.db)
            .set_index(commander_id, storeup_id, index)
            .await?;

        tracing::info!(
            "Storeup {} progress of commander {} set to {}",
            storeup_id,
            commander_id,
            index
        );

        Ok(())
    }

    /// Occupy a skill room. A room that is already taken is a [`Error::Conflict`].
    pub async fn claim_skill_room(
        &self,
        commander_id: i32,
        class: &NewSkillClass,
    ) -> Result<SkillClassModel, Error> {
        let claimed = SkillClassRepository::new(self.db)
            .insert(commander_id, class)
            .await
            .map_err(|e| {
                Error::from_db_err(e, || {
                    format!("skill room {} of commander {}", class.room_id, commander_id)
                })
            })?;

        tracing::debug!(
            "Commander {} claimed skill room {}",
            commander_id,
            class.room_id
        );

        Ok(claimed)
    }

    /// Start training: ensure the ship skill exists, claim the room and spend the lesson item.
    ///
    /// All three happen in one transaction, so a taken room or a missing lesson leaves no
    /// trace.
    pub async fn start_skill_class(
        &self,
        commander: &mut Commander,
        class: &NewSkillClass,
        lesson_item_id: i32,
    ) -> Result<SkillClassModel, Error> {
        let store = commander.item_store(lesson_item_id);

        let txn = self.db.begin().await?;
        let skill_repo = SkillClassRepository::new(&txn);
        skill_repo
            .get_or_create_ship_skill(
                commander.id(),
                class.ship_id,
                class.skill_pos,
                class.skill_id,
            )
            .await?;
        let claimed = skill_repo
            .insert(commander.id(), class)
            .await
            .map_err(|e| {
                Error::from_db_err(e, || {
                    format!("skill room {} of commander {}", class.room_id, commander.id())
                })
            })?;
        let spend = Ledger::new(&txn, commander.id())
            .consume_item(store, lesson_item_id, 1)
            .await?;
        txn.commit().await?;

        commander.apply(spend);

        tracing::info!(
            "Commander {} started skill class for ship {} in room {}",
            commander.id(),
            class.ship_id,
            class.room_id
        );

        Ok(claimed)
    }

    /// Complete a finished class: credit its exp to the ship skill and free the room.
    pub async fn finish_skill_class(
        &self,
        commander_id: i32,
        room_id: i32,
    ) -> Result<ShipSkillModel, Error> {
        let now = self.clock.now();

        let txn = self.db.begin().await?;
        let skill_repo = SkillClassRepository::new(&txn);
        let Some(class) = skill_repo.lock(commander_id, room_id).await? else {
            return Err(Error::NotFound(format!(
                "skill room {} of commander {}",
                room_id, commander_id
            )));
        };
        if class.finish_time > now {
            return Err(RuleError::SkillClassNotFinished {
                room_id,
                remaining_seconds: (class.finish_time - now).num_seconds().max(0),
            }
            .into());
        }

        skill_repo
            .get_or_create_ship_skill(commander_id, class.ship_id, class.skill_pos, class.skill_id)
            .await?;
        skill_repo
            .add_ship_skill_exp(commander_id, class.ship_id, class.skill_pos, class.exp)
            .await?;
        skill_repo.delete(commander_id, room_id).await?;
        let Some(skill) = skill_repo
            .get_ship_skill(commander_id, class.ship_id, class.skill_pos)
            .await?
        else {
            return Err(Error::InternalError(format!(
                "ship skill ({}, {}, {}) vanished inside its transaction",
                commander_id, class.ship_id, class.skill_pos
            )));
        };
        txn.commit().await?;

        tracing::info!(
            "Commander {} finished skill class in room {} (+{} exp)",
            commander_id,
            room_id,
            class.exp
        );

        Ok(skill)
    }

    /// Abort a class and free the room. No exp is credited.
    pub async fn cancel_skill_class(&self, commander_id: i32, room_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let skill_repo = SkillClassRepository::new(&txn);
        if skill_repo.lock(commander_id, room_id).await?.is_none() {
            return Err(Error::NotFound(format!(
                "skill room {} of commander {}",
                room_id, commander_id
            )));
        }
        skill_repo.delete(commander_id, room_id).await?;
        txn.commit().await?;

        tracing::debug!(
            "Commander {} cancelled skill class in room {}",
            commander_id,
            room_id
        );

        Ok(())
    }

    pub async fn list_skill_classes(
        &self,
        commander_id: i32,
    ) -> Result<Vec<SkillClassModel>, Error> {
        Ok(SkillClassRepository::new(self.db).list(commander_id).await?)
    }

    pub async fn get_ship_skill(
        &self,
        commander_id: i32,
        ship_id: i32,
        skill_pos: i32,
    ) -> Result<ShipSkillModel, Error> {
        SkillClassRepository::new(self.db)
            .get_ship_skill(commander_id, ship_id, skill_pos)
            .await?
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "skill {} of ship {} for commander {}",
                    skill_pos, ship_id, commander_id
                ))
            })
    }
}

#[cfg(test)]
mod tests;
