//! Menu commands.
//!
//! # Usage
//!
//! ```bash
//! cafe-cli menu list --shop blue-door
//! cafe-cli menu add-category --shop blue-door --name Coffee --sort-order 1
//! cafe-cli menu add-item --category 4 --name Latte --price 4.50
//! cafe-cli menu import --shop blue-door menu.yaml
//! ```
//!
//! # Seed file format
//!
//! ```yaml
//! categories:
//!   - name: Coffee
//!     sort_order: 1
//!     items:
//!       - name: Latte
//!         price: "4.50"
//!       - name: Flat White
//!         price: "4.20"
//! ```

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use cafe_desk_admin::db::{MenuRepository, ShopRepository};
use cafe_desk_admin::models::{NewMenuCategory, NewMenuItem};
use cafe_desk_core::{CurrencyCode, MenuCategoryId};

use super::{TaskError, TaskResult, connect};

/// Decimal places stored by the `menu_items.price` column.
const PRICE_SCALE: u32 = 2;

/// A menu seed file.
#[derive(Debug, Deserialize)]
pub struct MenuSeed {
    pub categories: Vec<CategorySeed>,
}

#[derive(Debug, Deserialize)]
pub struct CategorySeed {
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub items: Vec<ItemSeed>,
}

#[derive(Debug, Deserialize)]
pub struct ItemSeed {
    pub name: String,
    pub price: Decimal,
}

impl MenuSeed {
    /// Parse and validate a seed document.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::SeedFile` for malformed YAML, and
    /// `TaskError::InvalidArgument` for blank names, negative prices, prices
    /// with more than two decimal places or a category listed twice.
    pub fn parse(yaml: &str) -> Result<Self, TaskError> {
        let seed: Self =
            serde_yaml::from_str(yaml).map_err(|e| TaskError::SeedFile(e.to_string()))?;
        seed.validate()?;
        Ok(seed)
    }

    fn validate(&self) -> Result<(), TaskError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            let name = category.name.trim();
            if name.is_empty() {
                return Err(TaskError::InvalidArgument(
                    "category name must not be blank".to_owned(),
                ));
            }
            if !seen.insert(name) {
                return Err(TaskError::InvalidArgument(format!(
                    "category '{name}' is listed twice"
                )));
            }
            for item in &category.items {
                validate_item(&item.name, item.price, PRICE_SCALE)?;
            }
        }
        Ok(())
    }

    /// Check every price against the minor units of `currency`.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::InvalidArgument` for the first price with more
    /// decimal places than the currency has.
    pub fn check_currency(&self, currency: CurrencyCode) -> Result<(), TaskError> {
        self.categories
            .iter()
            .flat_map(|c| &c.items)
            .try_for_each(|item| validate_item(&item.name, item.price, currency.decimal_places()))
    }

    /// Total number of items across categories.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

/// Print a shop's menu.
pub async fn list(shop_slug: &str) -> TaskResult {
    let pool = connect().await?;
    let shop = ShopRepository::new(&pool).get_by_slug(shop_slug).await?;
    let menu = MenuRepository::new(&pool).menu_for_shop(&shop).await?;
    Ok(menu.lines())
}

/// Insert a category into a shop's menu.
pub async fn add_category(shop_slug: &str, name: &str, sort_order: i32) -> TaskResult {
    if name.trim().is_empty() {
        return Err(TaskError::InvalidArgument(
            "category name must not be blank".to_owned(),
        ));
    }

    let pool = connect().await?;
    let shop = ShopRepository::new(&pool).get_by_slug(shop_slug).await?;
    let category = MenuRepository::new(&pool)
        .create_category(&NewMenuCategory {
            shop_id: shop.id,
            name: name.trim().to_owned(),
            sort_order,
        })
        .await?;

    Ok(vec![format!(
        "Created category #{} {} in {}",
        category.id, category.name, shop.name
    )])
}

/// Insert an item into a category.
pub async fn add_item(category_id: MenuCategoryId, name: &str, price: Decimal) -> TaskResult {
    validate_item(name, price, PRICE_SCALE)?;

    let pool = connect().await?;
    let menus = MenuRepository::new(&pool);
    let currency = menus.category_currency(category_id).await?;
    validate_item(name, price, currency.decimal_places())?;

    let item = menus
        .create_item(&NewMenuItem {
            category_id,
            name: name.trim().to_owned(),
            price,
        })
        .await?;

    Ok(vec![format!(
        "Created item #{} {} at {} in category #{}",
        item.id, item.name, item.price, item.category_id
    )])
}

/// Seed a shop's menu from a YAML file.
///
/// Categories that already exist (by name) are reused; items are always
/// inserted.
pub async fn import(shop_slug: &str, path: &Path) -> TaskResult {
    info!(path = %path.display(), "Loading menu seed");
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| TaskError::SeedFile(format!("{}: {e}", path.display())))?;
    let seed = MenuSeed::parse(&content)?;
    info!(
        categories = seed.categories.len(),
        items = seed.item_count(),
        "Parsed menu seed"
    );

    let pool = connect().await?;
    let shop = ShopRepository::new(&pool).get_by_slug(shop_slug).await?;
    seed.check_currency(shop.currency)?;
    let menus = MenuRepository::new(&pool);

    let mut lines = Vec::new();
    for category in seed.categories {
        let name = category.name.trim().to_owned();
        let existing = menus.find_category(shop.id, &name).await?;
        let (stored, verb) = match existing {
            Some(found) => (found, "Reused"),
            None => {
                let created = menus
                    .create_category(&NewMenuCategory {
                        shop_id: shop.id,
                        name,
                        sort_order: category.sort_order,
                    })
                    .await?;
                (created, "Created")
            }
        };
        lines.push(format!("{verb} category #{} {}", stored.id, stored.name));

        for item in category.items {
            let created = menus
                .create_item(&NewMenuItem {
                    category_id: stored.id,
                    name: item.name.trim().to_owned(),
                    price: item.price,
                })
                .await?;
            lines.push(format!("  + #{} {} {}", created.id, created.name, created.price));
        }
    }

    Ok(lines)
}

/// Reject blank names, negative prices and prices that would be rounded
/// when stored with `max_scale` decimal places.
fn validate_item(name: &str, price: Decimal, max_scale: u32) -> Result<(), TaskError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TaskError::InvalidArgument(
            "item name must not be blank".to_owned(),
        ));
    }
    if price < Decimal::ZERO {
        return Err(TaskError::InvalidArgument(format!(
            "price of '{name}' must not be negative"
        )));
    }
    if price.normalize().scale() > max_scale {
        return Err(TaskError::InvalidArgument(format!(
            "price of '{name}' has more than {max_scale} decimal places: {price}"
        )));
    }
    Ok(())
}
