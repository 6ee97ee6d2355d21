//! Database migration command.
//!
//! ```bash
//! cafe-cli migrate
//! ```
//!
//! Migrations live in `crates/admin/migrations/` and are embedded in the
//! admin crate at compile time.

use cafe_desk_admin::db::{self, MIGRATOR};

use super::{TaskResult, connect};

/// Apply every pending migration.
pub async fn run() -> TaskResult {
    let pool = connect().await?;

    tracing::info!(available = MIGRATOR.iter().count(), "Running migrations...");
    db::run_migrations(&pool).await?;

    Ok(vec!["Migrations complete".to_owned()])
}
