use crate::model::{
    db::{BuildModel, OwnedShipModel, OwnedSkinModel},
    ship::OwnedShipEntry,
};

/// A store write that has been performed and must be mirrored into the aggregate.
///
/// Transaction-scoped ledger calls return these instead of touching the cache, so a caller
/// can apply them with [`Commander::apply_all`](super::commander::Commander::apply_all) once the
/// transaction has committed.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheUpdate {
    ResourceDelta { resource_id: i32, delta: i64 },
    ResourceSet { resource_id: i32, amount: i64 },
    ItemDelta { item_id: i32, delta: i64 },
    ItemSet { item_id: i32, count: i64 },
    MiscItemDelta { item_id: i32, delta: i64 },
    EquipmentDelta { equipment_id: i32, delta: i64 },
    SkinGranted(OwnedSkinModel),
    ShipAdded(OwnedShipEntry),
    ShipUpdated(OwnedShipModel),
    ShipsRemoved(Vec<i32>),
    BuildAdded(BuildModel),
    BuildUpdated(BuildModel),
    BuildRemoved(i32),
    ExchangeCount(i32),
}
