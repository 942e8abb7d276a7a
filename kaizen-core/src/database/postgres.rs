use std::{fmt, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use crate::{
    database::PostgresProductRepository,
    error::{CatalogError, Result},
};

/// Connection pool sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
        }
    }
}

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: PgPool,
    settings: PoolSettings,
}

impl fmt::Debug for PostgresDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresDatabase")
            .field("pool_size", &self.pool.size())
            .field("idle_connections", &self.pool.num_idle())
            .field("max_connections", &self.settings.max_connections)
            .field("min_connections", &self.settings.min_connections)
            .finish()
    }
}

impl PostgresDatabase {
    pub async fn new(
        connection_string: &str,
        settings: PoolSettings,
    ) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(connection_string)
            .await
            .map_err(|e| {
                CatalogError::Internal(format!(
                    "Database connection failed: {e}"
                ))
            })?;

        info!(
            max_connections = settings.max_connections,
            min_connections = settings.min_connections,
            "Database pool initialized"
        );

        Ok(Self { pool, settings })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the embedded migrations.
    pub async fn initialize_schema(&self) -> Result<()> {
        crate::MIGRATOR.run(&self.pool).await.map_err(|e| {
            CatalogError::Internal(format!("Failed to run migrations: {e}"))
        })?;
        info!("Database schema is up to date");
        Ok(())
    }

    pub fn products(&self) -> PostgresProductRepository {
        PostgresProductRepository::new(self.pool.clone())
    }
}
