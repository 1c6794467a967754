#![deny(unsafe_code)]

//! SQLite persistence layer for Craneboard.
//!
//! Provides the [`Store`] handle wrapping a `sqlx` connection pool, with
//! repository methods grouped by aggregate: [`companies`], [`jobs`],
//! [`technologies`], and [`skills`]. Migrations are embedded at compile
//! time and run via [`Store::migrate`].

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

/// Company repository.
pub mod companies;
/// Job repository.
pub mod jobs;
/// Skill registration repository.
pub mod skills;
/// Technology catalog repository.
pub mod technologies;

mod rows;

/// Compile-time discovered migrations for the store.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("corrupt row: {0}")]
    Corrupt(#[from] craneboard_core::model::ParseEnumError),

    #[error("record not found")]
    NotFound,
}

/// Shared database handle passed across crates.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (creating if missing) the database at the given URL.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        info!(url, "connected to database");
        Ok(Self { pool })
    }

    /// An in-memory store for tests.
    ///
    /// Pinned to a single connection: every pooled SQLite connection would
    /// otherwise get its own private in-memory database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let store = Self::connect("sqlite::memory:", 1).await?;
        store.migrate().await?;
        Ok(store)
    }

    /// Create a store from an existing pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run pending migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    /// Expose the underlying pool for query modules.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
