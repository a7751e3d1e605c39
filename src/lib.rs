//! Commander ledger for a multiplayer game server.
//!
//! The crate keeps each commander's economy (resources, items, ships, builds and
//! progression counters) consistent between the durable store and an in-memory
//! [`Commander`](model::commander::Commander) aggregate. Every balance-affecting write goes
//! through a single guarded SQL statement or a row lock, and multi-step operations run in one
//! transaction whose cache effects are applied only after commit.

pub mod config;
pub mod constant;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;

pub use error::Error;
