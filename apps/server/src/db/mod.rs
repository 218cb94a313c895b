//! Database module providing connection management, migrations, and queries.

pub mod dbinfo;
pub mod nodegroups;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::migration::Migrator;
use crate::upgrade;

/// Database connection pool wrapper.
///
/// `DatabaseConnection` is itself a pool handle, so cloning is cheap.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Create a new database pool from configuration.
    pub async fn new(config: &Config) -> AppResult<Self> {
        let mut opts = ConnectOptions::new(config.database.url.clone());
        opts.max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let conn = Database::connect(opts)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        info!(
            "Database pool ready ({}-{} connections)",
            config.database.min_connections, config.database.max_connections
        );

        Ok(Self { conn })
    }

    /// Wrap an existing connection (tests, tools).
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get access to the connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Create the baseline schema if it does not exist yet.
    pub async fn run_migrations(&self) -> AppResult<()> {
        Migrator::up(&self.conn, None)
            .await
            .map_err(|e| AppError::Database(format!("Baseline migration failed: {}", e)))
    }

    /// Apply pending LMS upgrade steps. Returns the versions applied.
    pub async fn run_upgrades(&self) -> AppResult<Vec<&'static str>> {
        upgrade::run_upgrades(&self.conn).await
    }

    /// Check the database answers.
    pub async fn ping(&self) -> AppResult<()> {
        self.conn
            .ping()
            .await
            .map_err(|e| AppError::Database(format!("Database ping failed: {}", e)))
    }
}
