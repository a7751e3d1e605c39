use sea_orm::{DbErr, SqlErr};

use super::Error;

/// Storage failure as seen by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NotFound,
    Conflict,
    Fatal,
}

/// The only place engine-specific error details are inspected.
pub fn classify_db_err(err: &DbErr) -> ErrorClass {
    if matches!(err, DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated) {
        return ErrorClass::NotFound;
    }

    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ErrorClass::Conflict,
        _ => ErrorClass::Fatal,
    }
}

impl Error {
    /// Maps a storage failure to a domain error, describing the row with `subject`.
    pub fn from_db_err(err: DbErr, subject: impl FnOnce() -> String) -> Self {
        match classify_db_err(&err) {
            ErrorClass::NotFound => Error::NotFound(subject()),
            ErrorClass::Conflict => Error::Conflict(format!("{} already exists", subject())),
            ErrorClass::Fatal => Error::DbErr(err),
        }
    }
}
