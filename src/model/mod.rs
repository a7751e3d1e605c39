//! In-memory data structures with no storage access.

pub mod alias;
pub mod build;
pub mod cache;
pub mod collection;
pub mod commander;
pub mod db;
pub mod ship;
pub mod template;
