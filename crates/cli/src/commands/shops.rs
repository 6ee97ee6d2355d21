//! Shop commands.

use cafe_desk_admin::db::ShopRepository;
use cafe_desk_admin::models::NewShop;
use cafe_desk_core::CurrencyCode;

use super::{TaskError, TaskResult, connect};

/// List every shop.
pub async fn list() -> TaskResult {
    let pool = connect().await?;
    let shops = ShopRepository::new(&pool).list_all().await?;
    Ok(shops.iter().map(ToString::to_string).collect())
}

/// Insert a shop.
pub async fn create(name: &str, slug: &str, currency: CurrencyCode) -> TaskResult {
    let shop = NewShop::new(name, slug, currency)
        .map_err(|e| TaskError::InvalidArgument(e.to_string()))?;

    let pool = connect().await?;
    tracing::info!(slug = %shop.slug, "Creating shop");
    let created = ShopRepository::new(&pool).create(&shop).await?;

    Ok(vec![format!("Created shop {created}")])
}
