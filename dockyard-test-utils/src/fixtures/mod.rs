//! Fixtures that insert rows into the test database, plus pure model factories.
//!
//! - `ledger` - commanders and the per-commander counter and ownership tables
//! - `config` - static content documents such as ship templates
//! - `factory` - in-memory models for tests that never touch the database

pub mod config;
pub mod factory;
pub mod ledger;
