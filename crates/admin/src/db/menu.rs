//! Menu repository.

use rust_decimal::Decimal;
use sqlx::PgPool;

use cafe_desk_core::{CurrencyCode, MenuCategoryId, MenuItemId, ShopId};

use super::RepositoryError;
use crate::models::{MenuCategory, MenuItem, NewMenuCategory, NewMenuItem, Shop, ShopMenu};

#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: MenuCategoryId,
    shop_id: ShopId,
    name: String,
    sort_order: i32,
}

impl From<CategoryRow> for MenuCategory {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            shop_id: row.shop_id,
            name: row.name,
            sort_order: row.sort_order,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: MenuItemId,
    category_id: MenuCategoryId,
    name: String,
    price: Decimal,
    is_available: bool,
}

impl From<ItemRow> for MenuItem {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            category_id: row.category_id,
            name: row.name,
            price: row.price,
            is_available: row.is_available,
        }
    }
}

/// Repository for menu database operations.
pub struct MenuRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MenuRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load a shop's full menu.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either query fails.
    pub async fn menu_for_shop(&self, shop: &Shop) -> Result<ShopMenu, RepositoryError> {
        let categories = sqlx::query_as::<_, CategoryRow>(
            r"
            SELECT id, shop_id, name, sort_order
            FROM menu_categories
            WHERE shop_id = $1
            ORDER BY sort_order, name
            ",
        )
        .bind(shop.id)
        .fetch_all(self.pool)
        .await?;

        let items = sqlx::query_as::<_, ItemRow>(
            r"
            SELECT i.id, i.category_id, i.name, i.price, i.is_available
            FROM menu_items i
            JOIN menu_categories c ON c.id = i.category_id
            WHERE c.shop_id = $1
            ORDER BY i.name
            ",
        )
        .bind(shop.id)
        .fetch_all(self.pool)
        .await?;

        Ok(ShopMenu::assemble(
            shop.currency,
            categories.into_iter().map(Into::into).collect(),
            items.into_iter().map(Into::into).collect(),
        ))
    }

    /// Insert a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the shop already has a category
    /// with that name.
    pub async fn create_category(
        &self,
        category: &NewMenuCategory,
    ) -> Result<MenuCategory, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r"
            INSERT INTO menu_categories (shop_id, name, sort_order)
            VALUES ($1, $2, $3)
            RETURNING id, shop_id, name, sort_order
            ",
        )
        .bind(category.shop_id)
        .bind(&category.name)
        .bind(category.sort_order)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, &format!("category '{}'", category.name)))?;

        Ok(row.into())
    }

    /// Find a shop's category by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_category(
        &self,
        shop_id: ShopId,
        name: &str,
    ) -> Result<Option<MenuCategory>, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r"
            SELECT id, shop_id, name, sort_order
            FROM menu_categories
            WHERE shop_id = $1 AND name = $2
            ",
        )
        .bind(shop_id)
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Currency of the shop that owns a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the category does not exist.
    /// Returns `RepositoryError::DataCorruption` if the shop currency is unknown.
    pub async fn category_currency(
        &self,
        category_id: MenuCategoryId,
    ) -> Result<CurrencyCode, RepositoryError> {
        let currency: Option<String> = sqlx::query_scalar(
            r"
            SELECT s.currency
            FROM menu_categories c
            JOIN shops s ON s.id = c.shop_id
            WHERE c.id = $1
            ",
        )
        .bind(category_id)
        .fetch_optional(self.pool)
        .await?;

        let currency = currency
            .ok_or_else(|| RepositoryError::NotFound(format!("category #{category_id}")))?;
        currency.parse().map_err(|e: cafe_desk_core::CurrencyError| {
            RepositoryError::DataCorruption(format!("category #{category_id}: {e}"))
        })
    }

    /// Insert an item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the category does not exist.
    pub async fn create_item(&self, item: &NewMenuItem) -> Result<MenuItem, RepositoryError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r"
            INSERT INTO menu_items (category_id, name, price)
            VALUES ($1, $2, $3)
            RETURNING id, category_id, name, price, is_available
            ",
        )
        .bind(item.category_id)
        .bind(&item.name)
        .bind(item.price)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, &format!("item '{}'", item.name)))?;

        Ok(row.into())
    }
}
