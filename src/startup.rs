use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::Error};

/// Install the global `tracing` subscriber at the configured level.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();
}

/// Connect to the database without touching the schema
pub async fn connect(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let db = connect(config).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations are up to date");

    Ok(db)
}
