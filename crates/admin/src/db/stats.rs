//! Aggregate counts for dashboards.

use sqlx::PgPool;

use cafe_desk_core::UserRole;

use super::RepositoryError;
use crate::models::PlatformTotals;

pub struct StatsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StatsRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Shop and user counts across all tenants.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` for an unknown role.
    pub async fn platform_totals(&self) -> Result<PlatformTotals, RepositoryError> {
        let shops: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shops")
            .fetch_one(self.pool)
            .await?;

        let role_rows: Vec<(String, i64)> = sqlx::query_as(
            r"
            SELECT role, COUNT(*)
            FROM users
            GROUP BY role
            ORDER BY role
            ",
        )
        .fetch_all(self.pool)
        .await?;

        let users_by_role = role_rows
            .into_iter()
            .map(|(role, n)| {
                role.parse::<UserRole>()
                    .map(|r| (r, n))
                    .map_err(|e| RepositoryError::DataCorruption(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let shops_by_currency: Vec<(String, i64)> = sqlx::query_as(
            r"
            SELECT currency, COUNT(*)
            FROM shops
            GROUP BY currency
            ORDER BY COUNT(*) DESC, currency
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(PlatformTotals {
            shops,
            users_by_role,
            shops_by_currency,
        })
    }
}
