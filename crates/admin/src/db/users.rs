//! User repository.
//!
//! Password hashes are only read and written here through the dedicated
//! password methods; [`User`] never carries one.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use cafe_desk_core::{Email, Phone, ShopId, UserId, UserRole};

use super::RepositoryError;
use crate::models::{NewUser, User};

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: UserId,
    email: Option<String>,
    phone: Option<String>,
    name: String,
    role: String,
    shop_id: Option<ShopId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let corrupt = |e: &dyn std::fmt::Display| {
            RepositoryError::DataCorruption(format!("user {}: {e}", row.id))
        };

        let email = row
            .email
            .as_deref()
            .map(Email::parse)
            .transpose()
            .map_err(|e| corrupt(&e))?;
        let phone = row
            .phone
            .as_deref()
            .map(Phone::parse)
            .transpose()
            .map_err(|e| corrupt(&e))?;
        let role: UserRole = row.role.parse().map_err(|e| corrupt(&e))?;

        Ok(Self {
            id: row.id,
            email,
            phone,
            name: row.name,
            role,
            shop_id: row.shop_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// A user's ID with their stored bcrypt hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StoredHash {
    pub id: UserId,
    pub password_hash: String,
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List users, optionally only those with `role`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row does not parse.
    pub async fn list(&self, role: Option<UserRole>) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, phone, name, role, shop_id, created_at, updated_at
            FROM users
            WHERE $1::TEXT IS NULL OR role = $1
            ORDER BY id
            ",
        )
        .bind(role.map(UserRole::as_str))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Insert a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email or phone is taken or
    /// the shop does not exist.
    pub async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (email, phone, name, password_hash, role, shop_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, phone, name, role, shop_id, created_at, updated_at
            ",
        )
        .bind(user.email.as_ref().map(Email::as_str))
        .bind(user.phone.as_ref().map(Phone::as_str))
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.shop_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "user"))?;

        row.try_into()
    }

    /// Stored hashes of every user with `role`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn password_hashes(&self, role: UserRole) -> Result<Vec<StoredHash>, RepositoryError> {
        let rows = sqlx::query_as::<_, StoredHash>(
            r"
            SELECT id, password_hash
            FROM users
            WHERE role = $1
            ORDER BY id
            ",
        )
        .bind(role.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Overwrite the password hash of every user with `role`.
    ///
    /// Every matching row receives the identical hash. Returns the number of
    /// rows updated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn set_password_hash_for_role(
        &self,
        role: UserRole,
        password_hash: &str,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET password_hash = $1, updated_at = NOW()
            WHERE role = $2
            ",
        )
        .bind(password_hash)
        .bind(role.as_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
