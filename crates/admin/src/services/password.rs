//! bcrypt hashing and verification.
//!
//! bcrypt is CPU-bound, so every call runs on the blocking thread pool.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use cafe_desk_core::UserId;

use crate::db::users::StoredHash;

/// Errors from password hashing.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("password task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("password must not be empty")]
    Empty,
}

/// Outcome of checking one stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCheck {
    pub user_id: UserId,
    pub matches: bool,
}

/// Hashes and verifies passwords at a fixed bcrypt cost.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    /// A hasher with a custom cost (tests use `bcrypt::MIN_COST`).
    #[must_use]
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password.
    ///
    /// # Errors
    ///
    /// Returns `PasswordError::Empty` for an empty password, or a bcrypt /
    /// join error.
    pub async fn hash(&self, password: &SecretString) -> Result<String, PasswordError> {
        if password.expose_secret().is_empty() {
            return Err(PasswordError::Empty);
        }
        let password = password.clone();
        let cost = self.cost;
        let hash =
            tokio::task::spawn_blocking(move || bcrypt::hash(password.expose_secret(), cost))
                .await??;
        Ok(hash)
    }

    /// Check a password against every stored hash, in order.
    ///
    /// A malformed hash counts as a mismatch rather than aborting the batch.
    ///
    /// # Errors
    ///
    /// Returns `PasswordError::Join` if the blocking task panics.
    pub async fn verify_all(
        &self,
        password: &SecretString,
        hashes: Vec<StoredHash>,
    ) -> Result<Vec<HashCheck>, PasswordError> {
        let password = password.clone();
        let checks = tokio::task::spawn_blocking(move || {
            hashes
                .into_iter()
                .map(|stored| HashCheck {
                    user_id: stored.id,
                    matches: bcrypt::verify(password.expose_secret(), &stored.password_hash)
                        .unwrap_or(false),
                })
                .collect::<Vec<_>>()
        })
        .await?;
        Ok(checks)
    }
}
