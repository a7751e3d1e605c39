use thiserror::Error;

/// A guarded decrement found the balance short. Never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Commander {commander_id} does not hold {amount} of resource {resource_id}")]
    InsufficientResource {
        commander_id: i32,
        resource_id: i32,
        amount: u32,
    },
    #[error("Commander {commander_id} does not hold {amount} of item {item_id}")]
    InsufficientItem {
        commander_id: i32,
        item_id: i32,
        amount: u32,
    },
    #[error("Commander {commander_id} does not hold {amount} of equipment {equipment_id}")]
    InsufficientEquipment {
        commander_id: i32,
        equipment_id: i32,
        amount: u32,
    },
}
