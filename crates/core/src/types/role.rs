//! User roles and the dashboards they unlock.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardKind;

/// Error returned for an unknown role name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid role: {0}. Valid roles: SUPER_ADMIN, AFFILIATE, CAFE_OWNER, STAFF")]
pub struct RoleError(pub String);

/// Access level stored on a user record.
///
/// Stored in the database as the `SCREAMING_SNAKE_CASE` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Operates the whole platform.
    SuperAdmin,
    /// Partner who refers shops to the platform.
    Affiliate,
    /// Owns one café.
    CafeOwner,
    /// Works in a café.
    Staff,
}

impl UserRole {
    /// All roles, in privilege order.
    pub const ALL: [Self; 4] = [Self::SuperAdmin, Self::Affiliate, Self::CafeOwner, Self::Staff];

    /// Database representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Affiliate => "AFFILIATE",
            Self::CafeOwner => "CAFE_OWNER",
            Self::Staff => "STAFF",
        }
    }

    /// The dashboard a session with this role may view, if any.
    #[must_use]
    pub const fn dashboard(self) -> Option<DashboardKind> {
        match self {
            Self::SuperAdmin => Some(DashboardKind::SuperAdmin),
            Self::Affiliate => Some(DashboardKind::Affiliate),
            Self::CafeOwner | Self::Staff => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `CAFE_OWNER`, `cafe_owner` and `cafe-owner`.
impl std::str::FromStr for UserRole {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| RoleError(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!("CAFE_OWNER".parse::<UserRole>().unwrap(), UserRole::CafeOwner);
        assert_eq!("cafe_owner".parse::<UserRole>().unwrap(), UserRole::CafeOwner);
        assert_eq!("super-admin".parse::<UserRole>().unwrap(), UserRole::SuperAdmin);
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_display_matches_storage() {
        for role in UserRole::ALL {
            assert_eq!(role.to_string().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_serde_uses_storage_name() {
        assert_eq!(
            serde_json::to_string(&UserRole::CafeOwner).unwrap(),
            "\"CAFE_OWNER\""
        );
    }

    #[test]
    fn test_dashboard_gating() {
        assert_eq!(
            UserRole::SuperAdmin.dashboard(),
            Some(DashboardKind::SuperAdmin)
        );
        assert_eq!(UserRole::Affiliate.dashboard(), Some(DashboardKind::Affiliate));
        assert_eq!(UserRole::CafeOwner.dashboard(), None);
        assert_eq!(UserRole::Staff.dashboard(), None);
    }
}
