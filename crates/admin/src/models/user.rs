//! User (login) records.

use std::fmt;

use chrono::{DateTime, Utc};

use cafe_desk_core::{Email, Phone, ShopId, UserId, UserRole};

/// A platform user.
///
/// The password hash is deliberately not part of this type; only the
/// password tasks read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: Option<Email>,
    pub phone: Option<Phone>,
    pub name: String,
    pub role: UserRole,
    pub shop_id: Option<ShopId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Email if present, otherwise phone.
    #[must_use]
    pub fn contact(&self) -> &str {
        self.email
            .as_ref()
            .map(Email::as_str)
            .or_else(|| self.phone.as_ref().map(Phone::as_str))
            .unwrap_or("-")
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} <{}> {}", self.id, self.name, self.contact(), self.role)?;
        if let Some(shop_id) = self.shop_id {
            write!(f, " shop #{shop_id}")?;
        }
        Ok(())
    }
}

/// Fields for inserting a user. `password_hash` must already be bcrypt.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Option<Email>,
    pub phone: Option<Phone>,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub shop_id: Option<ShopId>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(email: Option<&str>, phone: Option<&str>) -> User {
        User {
            id: UserId::new(3),
            email: email.map(|e| Email::parse(e).unwrap()),
            phone: phone.map(|p| Phone::parse(p).unwrap()),
            name: "Asha".to_owned(),
            role: UserRole::CafeOwner,
            shop_id: Some(ShopId::new(7)),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_contact_prefers_email() {
        assert_eq!(
            user(Some("asha@cafe.example"), Some("9841000000")).contact(),
            "asha@cafe.example"
        );
        assert_eq!(user(None, Some("9841000000")).contact(), "9841000000");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            user(Some("asha@cafe.example"), None).to_string(),
            "#3 Asha <asha@cafe.example> CAFE_OWNER shop #7"
        );
    }
}
