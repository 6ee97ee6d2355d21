//! Maintenance task implementations.
//!
//! Each task returns the lines it wants logged; `main` turns the result into
//! a single [`TaskReport`](cafe_desk_admin::tasks::TaskReport).

pub mod database;
pub mod menu;
pub mod migrate;
pub mod register;
pub mod shops;
pub mod users;

use sqlx::PgPool;
use thiserror::Error;

use cafe_desk_admin::config::{ConfigError, DatabaseConfig};
use cafe_desk_admin::db::{self, RepositoryError};
use cafe_desk_admin::services::{PasswordError, RegistrationError};

/// Errors that can stop a maintenance task.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Required environment variable is missing or invalid.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Could not connect to the database.
    #[error("Database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("{0}")]
    Repository(#[from] RepositoryError),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Registration request failed: {0}")]
    Registration(#[from] RegistrationError),

    /// Seed file could not be read or parsed.
    #[error("Seed file error: {0}")]
    SeedFile(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Lines to log on success, or the error that stopped the task.
pub type TaskResult = Result<Vec<String>, TaskError>;

/// Connect to the database named by `DATABASE_URL`.
pub(crate) async fn connect() -> Result<PgPool, TaskError> {
    let config = DatabaseConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config).await?;
    Ok(pool)
}
