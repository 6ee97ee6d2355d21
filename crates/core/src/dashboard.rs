//! Dashboard kinds and the cards they display.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A role-specific dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardKind {
    /// Referral performance for affiliate partners.
    Affiliate,
    /// Platform-wide totals for super-admins.
    SuperAdmin,
}

impl DashboardKind {
    /// All dashboards, in navigation order.
    pub const ALL: [Self; 2] = [Self::Affiliate, Self::SuperAdmin];

    /// URL path segment.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Affiliate => "affiliate",
            Self::SuperAdmin => "super-admin",
        }
    }

    /// Page heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Affiliate => "Affiliate Dashboard",
            Self::SuperAdmin => "Super Admin Dashboard",
        }
    }

    /// Path of the dashboard page.
    #[must_use]
    pub fn path(self) -> String {
        format!("/dashboard/{}", self.slug())
    }
}

impl fmt::Display for DashboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A single headline figure on a dashboard.
///
/// Values are preformatted so templates do no arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub caption: Option<String>,
}

impl StatCard {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            caption: None,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(DashboardKind::Affiliate.path(), "/dashboard/affiliate");
        assert_eq!(DashboardKind::SuperAdmin.path(), "/dashboard/super-admin");
    }

    #[test]
    fn test_stat_card_builder() {
        let card = StatCard::new("Shops", 12).with_caption("all tenants");
        assert_eq!(card.value, "12");
        assert_eq!(card.caption.as_deref(), Some("all tenants"));
    }
}
