//! Declarative test setup.
//!
//! A `TestBuilder` queues tables and fixture rows; `build()` creates the in-memory database,
//! the tables, then inserts the fixtures in declaration order.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// ```no_run
/// use dockyard_test_utils::TestBuilder;
///
/// # async fn example() -> Result<(), dockyard_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_ledger_tables()
///     .with_commander(1)
///     .with_resource(1, 1, 1_000)
///     .with_item(1, 15003, 2)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_ledger_tables: bool,

    commanders: Vec<i32>,
    resources: Vec<(i32, i32, i64)>,  // (commander_id, resource_id, amount)
    items: Vec<(i32, i32, i64)>,      // (commander_id, item_id, count)
    misc_items: Vec<(i32, i32, i64)>, // (commander_id, item_id, data)
    equipment: Vec<(i32, i32, i64)>,  // (commander_id, equipment_id, count)
    ship_templates: Vec<(i32, i32, i32, i32, i64)>, // (template_id, rarity, type, pool_id, build_time)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_ledger_tables: false,
            commanders: Vec::new(),
            resources: Vec::new(),
            items: Vec::new(),
            misc_items: Vec::new(),
            equipment: Vec::new(),
            ship_templates: Vec::new(),
        }
    }

    /// Create every table the commander aggregate is loaded from, plus the progression and
    /// config tables.
    pub fn with_ledger_tables(mut self) -> Self {
        self.include_ledger_tables = true;
        self
    }

    /// Add a single entity table. Chain calls to add several.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    pub fn with_commander(mut self, commander_id: i32) -> Self {
        self.commanders.push(commander_id);
        self
    }

    pub fn with_resource(mut self, commander_id: i32, resource_id: i32, amount: i64) -> Self {
        self.resources.push((commander_id, resource_id, amount));
        self
    }

    pub fn with_item(mut self, commander_id: i32, item_id: i32, count: i64) -> Self {
        self.items.push((commander_id, item_id, count));
        self
    }

    pub fn with_misc_item(mut self, commander_id: i32, item_id: i32, data: i64) -> Self {
        self.misc_items.push((commander_id, item_id, data));
        self
    }

    pub fn with_equipment(mut self, commander_id: i32, equipment_id: i32, count: i64) -> Self {
        self.equipment.push((commander_id, equipment_id, count));
        self
    }

    /// Register a ship template in the config store.
    pub fn with_ship_template(
        mut self,
        template_id: i32,
        rarity: i32,
        ship_type: i32,
        pool_id: i32,
        build_time: i64,
    ) -> Self {
        self.ship_templates
            .push((template_id, rarity, ship_type, pool_id, build_time));
        self
    }

    /// Create the configured tables and insert the queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready to use environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_ledger_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Commander),
                schema.create_table_from_entity(entity::prelude::OwnedResource),
                schema.create_table_from_entity(entity::prelude::CommanderItem),
                schema.create_table_from_entity(entity::prelude::CommanderMiscItem),
                schema.create_table_from_entity(entity::prelude::OwnedEquipment),
                schema.create_table_from_entity(entity::prelude::OwnedSkin),
                schema.create_table_from_entity(entity::prelude::OwnedShip),
                schema.create_table_from_entity(entity::prelude::OwnedSpweapon),
                schema.create_table_from_entity(entity::prelude::Fleet),
                schema.create_table_from_entity(entity::prelude::Build),
                schema.create_table_from_entity(entity::prelude::CommanderStoreupAwardProgress),
                schema.create_table_from_entity(entity::prelude::CommanderSkillClass),
                schema.create_table_from_entity(entity::prelude::CommanderShipSkill),
                schema.create_table_from_entity(entity::prelude::ConfigEntry),
            ]);
        }

        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        for commander_id in self.commanders {
            test.ledger().insert_commander(commander_id).await?;
        }

        for (commander_id, resource_id, amount) in self.resources {
            test.ledger()
                .insert_resource(commander_id, resource_id, amount)
                .await?;
        }

        for (commander_id, item_id, count) in self.items {
            test.ledger().insert_item(commander_id, item_id, count).await?;
        }

        for (commander_id, item_id, data) in self.misc_items {
            test.ledger()
                .insert_misc_item(commander_id, item_id, data)
                .await?;
        }

        for (commander_id, equipment_id, count) in self.equipment {
            test.ledger()
                .insert_equipment(commander_id, equipment_id, count)
                .await?;
        }

        for (template_id, rarity, ship_type, pool_id, build_time) in self.ship_templates {
            test.config()
                .insert_ship_template(template_id, rarity, ship_type, pool_id, build_time)
                .await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
