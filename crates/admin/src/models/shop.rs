//! Shop (tenant) records.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use cafe_desk_core::{CurrencyCode, ShopId};

/// A café storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub slug: String,
    pub currency: CurrencyCode,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Shop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} (slug: {}, currency: {})",
            self.id, self.name, self.slug, self.currency
        )
    }
}

/// Rejected shop slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid slug '{0}': use lowercase letters, digits and single dashes")]
pub struct SlugError(pub String);

/// Fields for inserting a shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShop {
    pub name: String,
    pub slug: String,
    pub currency: CurrencyCode,
}

impl NewShop {
    /// Build a new shop, validating the slug the same way the schema does.
    ///
    /// # Errors
    ///
    /// Returns `SlugError` if the slug is empty, has uppercase letters or
    /// other characters, or leading/trailing/double dashes.
    pub fn new(name: &str, slug: &str, currency: CurrencyCode) -> Result<Self, SlugError> {
        let valid = !slug.is_empty()
            && slug
                .split('-')
                .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        if !valid {
            return Err(SlugError(slug.to_owned()));
        }

        Ok(Self {
            name: name.trim().to_owned(),
            slug: slug.to_owned(),
            currency,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shop_accepts_kebab_slug() {
        let shop = NewShop::new(" Bean There ", "bean-there-2", CurrencyCode::EUR).unwrap();
        assert_eq!(shop.name, "Bean There");
        assert_eq!(shop.slug, "bean-there-2");
    }

    #[test]
    fn test_new_shop_rejects_bad_slugs() {
        for slug in ["", "Bean", "bean--there", "-bean", "bean-", "bean there", "bean_there"] {
            assert_eq!(
                NewShop::new("Bean", slug, CurrencyCode::USD),
                Err(SlugError(slug.to_owned())),
                "slug {slug:?} should be rejected"
            );
        }
    }
}
