use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient storage failures)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors - pool exhausted or timed out, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - transient, should retry
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query errors, constraint violations, type conversion and missing records
                // will fail the same way again
                _ => ErrorRetryStrategy::Fail,
            },

            // Balance shortfalls won't resolve by asking again
            Self::LedgerError(_) => ErrorRetryStrategy::Fail,

            // Rule violations and lost races are answers, not failures
            Self::RuleError(_) => ErrorRetryStrategy::Fail,
            Self::Conflict(_) => ErrorRetryStrategy::Fail,
            Self::NotFound(_) => ErrorRetryStrategy::Fail,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::JsonError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
