//! Shop repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use cafe_desk_core::{CurrencyCode, ShopId};

use super::RepositoryError;
use crate::models::{NewShop, Shop};

#[derive(Debug, sqlx::FromRow)]
struct ShopRow {
    id: ShopId,
    name: String,
    slug: String,
    currency: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ShopRow> for Shop {
    type Error = RepositoryError;

    fn try_from(row: ShopRow) -> Result<Self, Self::Error> {
        let currency: CurrencyCode = row.currency.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("shop {}: {e}", row.id))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            currency,
            created_at: row.created_at,
        })
    }
}

/// Repository for shop database operations.
pub struct ShopRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShopRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all shops, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a currency is unknown.
    pub async fn list_all(&self) -> Result<Vec<Shop>, RepositoryError> {
        let rows = sqlx::query_as::<_, ShopRow>(
            r"
            SELECT id, name, slug, currency, created_at
            FROM shops
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a shop by its slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no shop has the slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Shop, RepositoryError> {
        let row = sqlx::query_as::<_, ShopRow>(
            r"
            SELECT id, name, slug, currency, created_at
            FROM shops
            WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or_else(|| RepositoryError::NotFound(format!("shop '{slug}'")))?
            .try_into()
    }

    /// Insert a shop.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug is taken.
    pub async fn create(&self, shop: &NewShop) -> Result<Shop, RepositoryError> {
        let row = sqlx::query_as::<_, ShopRow>(
            r"
            INSERT INTO shops (name, slug, currency)
            VALUES ($1, $2, $3)
            RETURNING id, name, slug, currency, created_at
            ",
        )
        .bind(&shop.name)
        .bind(&shop.slug)
        .bind(shop.currency.code())
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, &format!("shop '{}'", shop.slug)))?;

        row.try_into()
    }
}
