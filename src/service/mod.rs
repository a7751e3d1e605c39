//! Operations on a commander.
//!
//! Services borrow the connection pool and, where an operation has several steps, open one
//! transaction for all of them. Operations that change what a commander owns take the
//! in-memory [`Commander`](crate::model::commander::Commander) and update it only after the
//! store write has committed.

pub mod build;
pub mod commander;
pub mod ledger;
pub mod progression;
pub mod retry;
pub mod ship;

pub use build::BuildService;
pub use commander::CommanderService;
pub use ledger::{Ledger, LedgerService};
pub use progression::{AwardGrant, ProgressionService};
pub use ship::ShipService;
