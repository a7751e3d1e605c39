//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Live test environment.
///
/// ```ignore
/// let test = TestBuilder::new().with_ledger_tables().with_commander(1).build().await?;
///
/// test.ledger().insert_resource(1, 1, 500).await?;
/// let service = LedgerService::new(&test.db);
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database.
    ///
    /// SQLite memory databases are served by a single pooled connection, so a test must
    /// not issue statements on `db` while it holds an open transaction.
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Opens a fresh in-memory database with no tables.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Executes CREATE TABLE statements in order.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
