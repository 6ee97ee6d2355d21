//! Menu categories and items.

use std::fmt;

use rust_decimal::Decimal;

use cafe_desk_core::{CurrencyCode, MenuCategoryId, MenuItemId, Price, ShopId};

/// A section of a shop's menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCategory {
    pub id: MenuCategoryId,
    pub shop_id: ShopId,
    pub name: String,
    pub sort_order: i32,
}

/// A priced catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub category_id: MenuCategoryId,
    pub name: String,
    pub price: Decimal,
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuCategory {
    pub shop_id: ShopId,
    pub name: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuItem {
    pub category_id: MenuCategoryId,
    pub name: String,
    pub price: Decimal,
}

/// A shop's categories, each with its items, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopMenu {
    pub currency: CurrencyCode,
    pub sections: Vec<(MenuCategory, Vec<MenuItem>)>,
}

impl ShopMenu {
    /// Group items under their categories, keeping category order.
    ///
    /// Items whose category is not in `categories` are dropped.
    #[must_use]
    pub fn assemble(
        currency: CurrencyCode,
        categories: Vec<MenuCategory>,
        items: Vec<MenuItem>,
    ) -> Self {
        let mut sections: Vec<(MenuCategory, Vec<MenuItem>)> =
            categories.into_iter().map(|c| (c, Vec::new())).collect();
        for item in items {
            if let Some((_, bucket)) = sections.iter_mut().find(|(c, _)| c.id == item.category_id) {
                bucket.push(item);
            }
        }
        Self { currency, sections }
    }

    /// One line per category and item.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (category, items) in &self.sections {
            lines.push(format!("{} (#{}, {} items)", category.name, category.id, items.len()));
            for item in items {
                lines.push(format!("  - {}", DisplayItem(item, self.currency)));
            }
        }
        lines
    }
}

struct DisplayItem<'a>(&'a MenuItem, CurrencyCode);

impl fmt::Display for DisplayItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(item, currency) = self;
        write!(
            f,
            "#{} {} {}",
            item.id,
            item.name,
            Price::new(item.price, *currency).display()
        )?;
        if !item.is_available {
            f.write_str(" (unavailable)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str) -> MenuCategory {
        MenuCategory {
            id: MenuCategoryId::new(id),
            shop_id: ShopId::new(1),
            name: name.to_owned(),
            sort_order: 0,
        }
    }

    fn item(id: i64, category_id: i64, name: &str, cents: i64, is_available: bool) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            category_id: MenuCategoryId::new(category_id),
            name: name.to_owned(),
            price: Decimal::new(cents, 2),
            is_available,
        }
    }

    #[test]
    fn test_assemble_groups_items_by_category() {
        let menu = ShopMenu::assemble(
            CurrencyCode::USD,
            vec![category(1, "Coffee"), category(2, "Pastries")],
            vec![
                item(10, 2, "Croissant", 325, true),
                item(11, 1, "Latte", 450, true),
                item(12, 9, "Orphan", 100, true),
            ],
        );
        assert_eq!(menu.sections.len(), 2);
        assert_eq!(menu.sections[0].1.len(), 1);
        assert_eq!(menu.sections[1].1[0].name, "Croissant");
    }

    #[test]
    fn test_lines_format_prices_in_shop_currency() {
        let menu = ShopMenu::assemble(
            CurrencyCode::EUR,
            vec![category(1, "Coffee")],
            vec![item(11, 1, "Latte", 450, true), item(12, 1, "Mocha", 500, false)],
        );
        assert_eq!(
            menu.lines(),
            vec![
                "Coffee (#1, 2 items)".to_owned(),
                "  - #11 Latte €4.50".to_owned(),
                "  - #12 Mocha €5.00 (unavailable)".to_owned(),
            ]
        );
    }
}
