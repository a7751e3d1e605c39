//! Ship construction queue.
//!
//! A build is created with a finish time, becomes ready once that time passes (or is pulled
//! forward with a quick finisher), and is consumed into an owned ship.

use chrono::Duration;
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    constant::{EXCHANGE_COUNT_CAP, QUICK_FINISHER_ITEM_ID, SHIP_TEMPLATE_CATEGORY},
    data::{BuildRepository, CommanderRepository, ConfigRepository},
    error::{rule::RuleError, Error},
    model::{
        build::{is_ready, rarity_for_roll, remaining_seconds},
        cache::CacheUpdate,
        commander::Commander,
        db::BuildModel,
        ship::OwnedShipEntry,
        template::ShipTemplate,
    },
    service::ledger::Ledger,
    util::time::{Clock, SystemClock},
};

pub struct BuildService<'a, K: Clock = SystemClock> {
    db: &'a DatabaseConnection,
    clock: K,
}

impl<'a> BuildService<'a> {
    /// Creates a new instance of [`BuildService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_clock(db, SystemClock)
    }
}

impl<'a, K: Clock> BuildService<'a, K> {
    pub fn with_clock(db: &'a DatabaseConnection, clock: K) -> Self {
        Self { db, clock }
    }

    /// Start a build from `pool_id`, rolling the rarity then a template of that rarity.
    ///
    /// # Returns
    /// - `Ok((BuildModel, i64))` - The queued build and its construction time in seconds
    /// - `Err(Error::NotFound)` - The pool has no template of the rolled rarity
    pub async fn create_build(
        &self,
        commander: &mut Commander,
        pool_id: i32,
    ) -> Result<(BuildModel, i64), Error> {
        let roll = rand::rng().random_range(1..=100u32);
        let rarity = rarity_for_roll(roll);

        let candidates = self.pool_templates(pool_id, rarity).await?;
        if candidates.is_empty() {
            return Err(Error::NotFound(format!(
                "ship template of rarity {} in build pool {}",
                rarity, pool_id
            )));
        }
        let pick = rand::rng().random_range(0..candidates.len());
        let template = &candidates[pick];

        let finishes_at = self.clock.now() + Duration::seconds(template.build_time);
        let build = BuildRepository::new(self.db)
            .create(commander.id(), template.id, pool_id, finishes_at)
            .await?;

        tracing::debug!(
            "Commander {} queued build {} of template {} (roll {}, rarity {})",
            commander.id(),
            build.id,
            template.id,
            roll,
            rarity
        );

        commander.apply(CacheUpdate::BuildAdded(build.clone()));

        Ok((build, template.build_time))
    }

    /// Make a build ready now by spending one quick finisher.
    ///
    /// The item spend and the finish time change commit together; a missing finisher leaves
    /// the build untouched.
    pub async fn quick_finish(
        &self,
        commander: &mut Commander,
        build_id: i32,
    ) -> Result<BuildModel, Error> {
        let Some(build) = commander.build(build_id).cloned() else {
            return Err(Error::NotFound(format!("build {}", build_id)));
        };
        let store = commander.item_store(QUICK_FINISHER_ITEM_ID);
        let finishes_at = self.clock.now() - Duration::seconds(1);

        let txn = self.db.begin().await?;
        let spend = Ledger::new(&txn, commander.id())
            .consume_item(store, QUICK_FINISHER_ITEM_ID, 1)
            .await?;
        let updated = BuildRepository::new(&txn)
            .set_finishes_at(commander.id(), build_id, finishes_at)
            .await?;
        if updated == 0 {
            return Err(Error::NotFound(format!("build {}", build_id)));
        }
        txn.commit().await?;

        let build = BuildModel {
            finishes_at,
            ..build
        };
        commander.apply_all([spend, CacheUpdate::BuildUpdated(build.clone())]);

        tracing::debug!(
            "Commander {} quick finished build {}",
            commander.id(),
            build_id
        );

        Ok(build)
    }

    /// Turn a ready build into an owned ship.
    ///
    /// The exchange count grows by the number of builds still queued after this one,
    /// saturating at the cap.
    ///
    /// # Returns
    /// - `Ok(OwnedShipEntry)` - The new ship
    /// - `Err(Error::NotFound)` - The build is not owned by the commander or was already consumed
    /// - `Err(Error::RuleError)` - The build is not ready or produces another template
    pub async fn consume(
        &self,
        commander: &mut Commander,
        build_id: i32,
        ship_template_id: i32,
    ) -> Result<OwnedShipEntry, Error> {
        let now = self.clock.now();

        let Some(build) = commander.build(build_id) else {
            return Err(Error::NotFound(format!("build {}", build_id)));
        };
        if !is_ready(build, now) {
            return Err(RuleError::BuildNotReady {
                build_id,
                remaining_seconds: remaining_seconds(build, now),
            }
            .into());
        }
        if build.ship_id != ship_template_id {
            return Err(RuleError::BuildTemplateMismatch {
                build_id,
                expected: build.ship_id,
                requested: ship_template_id,
            }
            .into());
        }

        // Builds still queued once this one is gone.
        let remaining_builds = i32::try_from(commander.builds.len().saturating_sub(1))
            .unwrap_or(EXCHANGE_COUNT_CAP);

        let template = ConfigRepository::new(self.db)
            .get(SHIP_TEMPLATE_CATEGORY, &ship_template_id.to_string())
            .await?
            .map(ShipTemplate::from_value)
            .transpose()?;

        let txn = self.db.begin().await?;
        let deleted = BuildRepository::new(&txn)
            .delete_owned(commander.id(), build_id)
            .await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("build {}", build_id)));
        }
        let entry = Ledger::new(&txn, commander.id())
            .add_ship(ship_template_id, template, now)
            .await?;
        let Some(exchange_count) = CommanderRepository::new(&txn)
            .increment_exchange_count(commander.id(), remaining_builds, EXCHANGE_COUNT_CAP)
            .await?
        else {
            return Err(Error::NotFound(format!("commander {}", commander.id())));
        };
        txn.commit().await?;

        commander.apply_all([
            CacheUpdate::BuildRemoved(build_id),
            CacheUpdate::ShipAdded(entry.clone()),
            CacheUpdate::ExchangeCount(exchange_count),
        ]);

        tracing::info!(
            "Commander {} received ship {} from build {}",
            commander.id(),
            entry.id(),
            build_id
        );

        Ok(entry)
    }

    /// Builds at positions `min_pos..=max_pos` of the commander's queue, ordered by ID.
    pub async fn list_builds_range(
        &self,
        commander_id: i32,
        min_pos: u32,
        max_pos: u32,
    ) -> Result<Vec<BuildModel>, Error> {
        if max_pos < min_pos {
            return Ok(Vec::new());
        }
        let limit = u64::from(max_pos - min_pos) + 1;

        Ok(BuildRepository::new(self.db)
            .list_range(commander_id, u64::from(min_pos), limit)
            .await?)
    }

    pub async fn get_build(&self, build_id: i32) -> Result<BuildModel, Error> {
        BuildRepository::new(self.db)
            .get(build_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("build {}", build_id)))
    }

    async fn pool_templates(&self, pool_id: i32, rarity: i32) -> Result<Vec<ShipTemplate>, Error> {
        let documents = ConfigRepository::new(self.db)
            .list(SHIP_TEMPLATE_CATEGORY)
            .await?;

        let mut templates = Vec::new();
        for (_, document) in documents {
            let template = ShipTemplate::from_value(document)?;
            if template.pool_id == Some(pool_id) && template.rarity == rarity {
                templates.push(template);
            }
        }

        Ok(templates)
    }
}

#[cfg(test)]
mod tests;
