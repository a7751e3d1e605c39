//! Test scaffolding for the commander ledger.
//!
//! Tests declare the tables and rows they need with [`TestBuilder`], then act on the
//! returned [`TestContext`] which owns an in-memory SQLite database.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
