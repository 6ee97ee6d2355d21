//! Services that sit beside the repositories.
//!
//! - [`password`] - bcrypt hashing on the blocking pool
//! - [`registration`] - HTTP client for the auth service

pub mod password;
pub mod registration;

pub use password::{HashCheck, PasswordError, PasswordHasher};
pub use registration::{
    RegistrationClient, RegistrationError, RegistrationRequest, RegistrationResponse,
};
