//! User commands.
//!
//! # Usage
//!
//! ```bash
//! cafe-cli users list --role cafe_owner
//! cafe-cli users create -n "Asha" -r cafe_owner -e asha@example.com -p 'flat-white-42' --shop blue-door
//! cafe-cli users reset-passwords -r cafe_owner -p 'flat-white-42'
//! cafe-cli users verify-passwords -r cafe_owner -p 'flat-white-42'
//! ```
//!
//! `reset-passwords` hashes the password once and writes that hash to every
//! user with the role.

use secrecy::SecretString;

use cafe_desk_admin::db::{ShopRepository, UserRepository};
use cafe_desk_admin::models::NewUser;
use cafe_desk_admin::services::PasswordHasher;
use cafe_desk_core::{Email, Phone, UserRole};

use super::{TaskError, TaskResult, connect};

/// Arguments of `users create`.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub role: UserRole,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: SecretString,
    /// Shop slug.
    pub shop: Option<String>,
}

/// List users, optionally only those with `role`.
pub async fn list(role: Option<UserRole>) -> TaskResult {
    let pool = connect().await?;
    let users = UserRepository::new(&pool).list(role).await?;
    Ok(users.iter().map(ToString::to_string).collect())
}

/// Insert a user.
pub async fn create(args: CreateUser) -> TaskResult {
    let (email, phone) = parse_contact(args.email.as_deref(), args.phone.as_deref())?;

    let password_hash = PasswordHasher::default().hash(&args.password).await?;

    let pool = connect().await?;

    let shop_id = match args.shop.as_deref() {
        Some(slug) => Some(ShopRepository::new(&pool).get_by_slug(slug).await?.id),
        None => None,
    };

    tracing::info!(role = %args.role, "Creating user: {}", args.name);
    let user = UserRepository::new(&pool)
        .create(&NewUser {
            email,
            phone,
            name: args.name,
            password_hash,
            role: args.role,
            shop_id,
        })
        .await?;

    Ok(vec![format!("Created user {user}")])
}

/// Overwrite the password of every user with `role`.
pub async fn reset_passwords(role: UserRole, password: SecretString) -> TaskResult {
    let hash = PasswordHasher::default().hash(&password).await?;

    let pool = connect().await?;
    let updated = UserRepository::new(&pool)
        .set_password_hash_for_role(role, &hash)
        .await?;

    Ok(vec![format!("Updated password for {updated} {role} user(s)")])
}

/// Check `password` against the stored hash of every user with `role`.
pub async fn verify_passwords(role: UserRole, password: SecretString) -> TaskResult {
    let pool = connect().await?;
    let hashes = UserRepository::new(&pool).password_hashes(role).await?;

    let checks = PasswordHasher::default().verify_all(&password, hashes).await?;
    let matching = checks.iter().filter(|c| c.matches).count();

    let mut lines: Vec<String> = checks
        .iter()
        .map(|c| {
            let verdict = if c.matches { "matches" } else { "does not match" };
            format!("User #{}: password {verdict}", c.user_id)
        })
        .collect();
    lines.push(format!("{matching}/{} {role} user(s) match", checks.len()));
    Ok(lines)
}

/// Validate the contact fields; at least one is required.
fn parse_contact(
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<(Option<Email>, Option<Phone>), TaskError> {
    if email.is_none() && phone.is_none() {
        return Err(TaskError::InvalidArgument(
            "either --email or --phone is required".to_owned(),
        ));
    }
    let email = email
        .map(Email::parse)
        .transpose()
        .map_err(|e| TaskError::InvalidArgument(e.to_string()))?;
    let phone = phone
        .map(Phone::parse)
        .transpose()
        .map_err(|e| TaskError::InvalidArgument(e.to_string()))?;
    Ok((email, phone))
}
