use std::collections::{BTreeSet, HashMap};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    constant::{COMMANDER_LEVEL_CAP, SHIP_TEMPLATE_CATEGORY},
    data::{
        BuildRepository, CommanderRepository, ConfigRepository, EquipmentRepository,
        FleetRepository, ItemRepository, MiscItemRepository, ResourceRepository, ShipRepository,
        SkinRepository, SpweaponRepository,
    },
    error::Error,
    model::{commander::Commander, ship::OwnedShipEntry, template::ShipTemplate},
    service::retry::RetryContext,
    util::time::{Clock, SystemClock},
};

/// Ship templates resolved so far, kept across load attempts.
#[derive(Clone, Debug, Default)]
pub struct TemplateCache(pub HashMap<i32, ShipTemplate>);

pub struct CommanderService<'a, K: Clock = SystemClock> {
    db: &'a DatabaseConnection,
    clock: K,
}

impl<'a> CommanderService<'a> {
    /// Creates a new instance of [`CommanderService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_clock(db, SystemClock)
    }
}

impl<'a, K: Clock> CommanderService<'a, K> {
    pub fn with_clock(db: &'a DatabaseConnection, clock: K) -> Self {
        Self { db, clock }
    }

    /// Load the full aggregate of a live commander.
    ///
    /// Connection failures are retried with backoff; templates resolved by a failed attempt
    /// are not fetched again.
    ///
    /// # Returns
    /// - `Ok(Commander)` - Commander row plus every owned collection
    /// - `Err(Error::NotFound)` - No commander with that ID, or it was deleted
    /// - `Err(Error::JsonError)` - A ship template document could not be parsed
    /// - `Err(Error::DbErr)` - Storage failure after retries
    pub async fn load_commander(&self, commander_id: i32) -> Result<Commander, Error> {
        let mut ctx: RetryContext<TemplateCache> = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("load of commander {}", commander_id), |cache| {
            let db = db.clone();

            Box::pin(async move { load(&db, commander_id, cache).await })
        })
        .await
    }

    pub async fn create_commander(
        &self,
        commander_id: i32,
        account_id: i32,
        name: &str,
    ) -> Result<Commander, Error> {
        let row = CommanderRepository::new(self.db)
            .create(commander_id, account_id, name, self.clock.now())
            .await
            .map_err(|e| {
                Error::from_db_err(e, || format!("commander {} or name {:?}", commander_id, name))
            })?;

        tracing::info!(
            "Created commander {} for account {}",
            commander_id,
            account_id
        );

        Ok(Commander::new(row))
    }

    /// Persist the commander's profile columns. The level is capped before writing.
    pub async fn commit(&self, commander: &mut Commander) -> Result<(), Error> {
        commander.row.level = commander.row.level.min(COMMANDER_LEVEL_CAP);

        let txn = self.db.begin().await?;
        let updated = CommanderRepository::new(&txn)
            .update_profile(&commander.row)
            .await
            .map_err(|e| {
                Error::from_db_err(e, || format!("commander name {:?}", commander.row.name))
            })?;
        if updated == 0 {
            return Err(Error::NotFound(format!("commander {}", commander.id())));
        }
        txn.commit().await?;

        tracing::debug!("Committed profile of commander {}", commander.id());

        Ok(())
    }

    pub async fn bump_last_login(&self, commander: &mut Commander) -> Result<(), Error> {
        let now = self.clock.now();

        let updated = CommanderRepository::new(self.db)
            .set_last_login(commander.id(), now)
            .await?;
        if updated == 0 {
            return Err(Error::NotFound(format!("commander {}", commander.id())));
        }
        commander.row.last_login = now;

        Ok(())
    }

    /// Tombstone the commander. Its rows stay in place but it can no longer be loaded.
    pub async fn delete_commander(&self, commander_id: i32) -> Result<(), Error> {
        let deleted = CommanderRepository::new(self.db)
            .tombstone(commander_id, self.clock.now())
            .await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("commander {}", commander_id)));
        }

        tracing::info!("Deleted commander {}", commander_id);

        Ok(())
    }
}

async fn load(
    db: &DatabaseConnection,
    commander_id: i32,
    cache: &mut TemplateCache,
) -> Result<Commander, Error> {
    let Some(row) = CommanderRepository::new(db).get_live(commander_id).await? else {
        return Err(Error::NotFound(format!("commander {}", commander_id)));
    };

    let resource_repo = ResourceRepository::new(db);
    let item_repo = ItemRepository::new(db);
    let misc_item_repo = MiscItemRepository::new(db);
    let equipment_repo = EquipmentRepository::new(db);
    let skin_repo = SkinRepository::new(db);
    let ship_repo = ShipRepository::new(db);
    let spweapon_repo = SpweaponRepository::new(db);
    let fleet_repo = FleetRepository::new(db);
    let build_repo = BuildRepository::new(db);

    let (resources, items, misc_items, equipment, skins, ships, spweapons, fleets, builds) =
        futures::try_join!(
            resource_repo.list(commander_id),
            item_repo.list(commander_id),
            misc_item_repo.list(commander_id),
            equipment_repo.list(commander_id),
            skin_repo.list(commander_id),
            ship_repo.list_live(commander_id),
            spweapon_repo.list(commander_id),
            fleet_repo.list(commander_id),
            build_repo.list_by_builder(commander_id),
        )?;

    let missing: BTreeSet<i32> = ships
        .iter()
        .map(|s| s.ship_id)
        .filter(|id| !cache.0.contains_key(id))
        .collect();
    if !missing.is_empty() {
        let keys: Vec<String> = missing.iter().map(|id| id.to_string()).collect();
        let documents = ConfigRepository::new(db)
            .get_many(SHIP_TEMPLATE_CATEGORY, &keys)
            .await?;

        for (_, document) in documents {
            let template = ShipTemplate::from_value(document)?;
            cache.0.insert(template.id, template);
        }
    }

    let mut commander = Commander::new(row);
    commander.resources.extend(resources);
    commander.items.extend(items);
    commander.misc_items.extend(misc_items);
    commander.equipment.extend(equipment);
    commander.skins.extend(skins);
    commander.ships.extend(ships.into_iter().map(|ship| {
        let template = cache.0.get(&ship.ship_id).cloned();
        OwnedShipEntry::new(ship, template)
    }));
    commander.spweapons.extend(spweapons);
    commander.fleets.extend(fleets);
    commander.builds.extend(builds);

    tracing::debug!(
        "Loaded commander {} with {} ships and {} builds",
        commander_id,
        commander.ships.len(),
        commander.builds.len()
    );

    Ok(commander)
}

#[cfg(test)]
mod tests;
