//! Database Module
//!
//! Owns the connection pool and runs migrations. The pool goes through the
//! sqlx Any driver so the same repository code serves SQLite and PostgreSQL.

pub mod repository;

use shared::error::{AppError, AppResult};
use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;
use sqlx::migrate::Migrator;

use crate::config::DatabaseTarget;

static SQLITE_MIGRATOR: Migrator = sqlx::migrate!("./migrations/sqlite");
static POSTGRES_MIGRATOR: Migrator = sqlx::migrate!("./migrations/postgres");

/// Database service — owns the connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: AnyPool,
}

impl DbService {
    /// Connect to the target store and bring its schema up to date
    pub async fn connect(target: &DatabaseTarget) -> AppResult<Self> {
        sqlx::any::install_default_drivers();

        let options = match target {
            // Every connection to `:memory:` is its own database, so keep exactly one alive.
            DatabaseTarget::Sqlite { .. } if target.is_memory() => AnyPoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None),
            DatabaseTarget::Sqlite { .. } => AnyPoolOptions::new().max_connections(5),
            DatabaseTarget::Postgres { .. } => AnyPoolOptions::new().max_connections(10),
        };

        let pool = options
            .connect(target.url())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            backend = target.backend_name(),
            "Database connection established"
        );

        let migrator = match target {
            DatabaseTarget::Sqlite { .. } => &SQLITE_MIGRATOR,
            DatabaseTarget::Postgres { .. } => &POSTGRES_MIGRATOR,
        };
        migrator
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }
}
