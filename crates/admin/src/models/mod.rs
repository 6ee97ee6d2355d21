//! Domain models for admin.
//!
//! These types represent validated records read from or written to the
//! platform database.

pub mod menu;
pub mod schema;
pub mod shop;
pub mod stats;
pub mod user;

pub use menu::{MenuCategory, MenuItem, NewMenuCategory, NewMenuItem, ShopMenu};
pub use schema::ColumnInfo;
pub use shop::{NewShop, Shop, SlugError};
pub use stats::PlatformTotals;
pub use user::{NewUser, User};
