//! Error types for the commander ledger.
//!
//! Domain failures are split into their own `thiserror` enums (`ledger`, `rule`, `config`)
//! and aggregated into [`Error`]. Storage engine errors only ever get interpreted by
//! [`classify::classify_db_err`].

pub mod classify;
pub mod config;
pub mod ledger;
pub mod retry;
pub mod rule;

use thiserror::Error;

use crate::error::{config::ConfigError, ledger::LedgerError, rule::RuleError};

/// Main error type returned by every service operation.
///
/// # Error Categories
/// - Lookups of rows that do not exist (`NotFound`)
/// - Short balances on guarded decrements (`LedgerError`)
/// - Lost races on exclusive claims or tier advances (`Conflict`)
/// - Business rule violations (`RuleError`)
/// - Storage failures (`DbErr`), always fatal to the operation
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A guarded decrement failed its balance check.
    #[error(transparent)]
    LedgerError(#[from] LedgerError),
    /// A business rule rejected the operation before any write.
    #[error(transparent)]
    RuleError(#[from] RuleError),
    /// The commander, ship, build or row does not exist.
    #[error("{0} not found")]
    NotFound(String),
    /// Another request already claimed the slot or advanced the tier.
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Failed to parse a config document.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Internal error indicating a bug in the ledger's code.
    #[error("Internal error in the commander ledger, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Coarse error kind surfaced to request handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InsufficientBalance,
    Conflict,
    BusinessRuleViolation,
    StorageFailure,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::LedgerError(_) => ErrorKind::InsufficientBalance,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::RuleError(_) => ErrorKind::BusinessRuleViolation,
            Self::ConfigError(_)
            | Self::JsonError(_)
            | Self::InternalError(_)
            | Self::DbErr(_) => ErrorKind::StorageFailure,
        }
    }
}
