//! Schema introspection and connectivity checks.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::ColumnInfo;

/// Read-only queries against the catalog.
pub struct SchemaRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SchemaRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The server's version string; doubles as a connectivity check.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the server is unreachable.
    pub async fn server_version(&self) -> Result<String, RepositoryError> {
        let version: String = sqlx::query_scalar("SELECT version()")
            .fetch_one(self.pool)
            .await?;
        Ok(version)
    }

    /// Base tables of the `public` schema, alphabetically.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_tables(&self) -> Result<Vec<String>, RepositoryError> {
        let tables: Vec<String> = sqlx::query_scalar(
            r"
            SELECT table_name::TEXT
            FROM information_schema.tables
            WHERE table_schema = 'public' AND table_type = 'BASE TABLE'
            ORDER BY table_name
            ",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(tables)
    }

    /// Columns of a `public` table in ordinal order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the table has no columns (does
    /// not exist).
    pub async fn list_columns(&self, table: &str) -> Result<Vec<ColumnInfo>, RepositoryError> {
        let columns = sqlx::query_as::<_, ColumnInfo>(
            r"
            SELECT column_name::TEXT AS column_name,
                   data_type::TEXT AS data_type,
                   (is_nullable = 'YES') AS is_nullable,
                   column_default::TEXT AS column_default
            FROM information_schema.columns
            WHERE table_schema = 'public' AND table_name = $1
            ORDER BY ordinal_position
            ",
        )
        .bind(table)
        .fetch_all(self.pool)
        .await?;

        if columns.is_empty() {
            return Err(RepositoryError::NotFound(format!("table '{table}'")));
        }
        Ok(columns)
    }
}
