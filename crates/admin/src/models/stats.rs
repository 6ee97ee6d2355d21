//! Platform-wide totals for the super-admin dashboard.

use cafe_desk_core::{ChartPoint, StatCard, UserRole};

/// Counts across every tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformTotals {
    pub shops: i64,
    pub users_by_role: Vec<(UserRole, i64)>,
    pub shops_by_currency: Vec<(String, i64)>,
}

impl PlatformTotals {
    #[must_use]
    pub fn users(&self) -> i64 {
        self.users_by_role.iter().map(|(_, n)| n).sum()
    }

    #[must_use]
    pub fn users_with_role(&self, role: UserRole) -> i64 {
        self.users_by_role
            .iter()
            .find(|(r, _)| *r == role)
            .map_or(0, |(_, n)| *n)
    }

    /// Headline cards, in display order.
    #[must_use]
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Shops", self.shops).with_caption("registered tenants"),
            StatCard::new("Users", self.users()),
            StatCard::new("Café owners", self.users_with_role(UserRole::CafeOwner)),
            StatCard::new("Affiliates", self.users_with_role(UserRole::Affiliate)),
        ]
    }

    /// Shops per currency; empty when there are no shops.
    #[must_use]
    pub fn currency_points(&self) -> Vec<ChartPoint> {
        self.shops_by_currency
            .iter()
            .map(|(currency, n)| {
                #[allow(clippy::cast_precision_loss)] // shop counts stay far below 2^52
                let value = *n as f64;
                ChartPoint::new(currency.clone(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_totals_are_zero() {
        let totals = PlatformTotals::default();
        assert_eq!(totals.users(), 0);
        assert!(totals.currency_points().is_empty());
        assert!(totals.cards().iter().all(|c| c.value == "0"));
    }

    #[test]
    fn test_role_counts() {
        let totals = PlatformTotals {
            shops: 4,
            users_by_role: vec![(UserRole::CafeOwner, 4), (UserRole::Staff, 9)],
            shops_by_currency: vec![("USD".to_owned(), 3), ("EUR".to_owned(), 1)],
        };
        assert_eq!(totals.users(), 13);
        assert_eq!(totals.users_with_role(UserRole::Affiliate), 0);
        assert_eq!(totals.cards()[2].value, "4");
        assert_eq!(totals.currency_points()[0], ChartPoint::new("USD", 3.0));
    }
}
