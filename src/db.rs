use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

use crate::{config::AppConfig, migration::Migrator};

pub type OrmConn = DatabaseConnection;

/// Create a SeaORM connection pool sized from the config.
pub async fn create_orm_conn(config: &AppConfig) -> Result<OrmConn> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);
    connect(options).await
}

/// Connect with caller-supplied options.
pub async fn connect(options: ConnectOptions) -> Result<OrmConn> {
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Apply every pending schema migration.
pub async fn run_migrations(conn: &OrmConn) -> Result<()> {
    Migrator::up(conn, None).await?;
    Ok(())
}
