//! Registration smoke test.
//!
//! Sends one `POST {REGISTRATION_BASE_URL}/auth/register` and reports the
//! status code and response body, whatever the status.
//!
//! ```bash
//! REGISTRATION_BASE_URL=http://localhost:4000 cafe-cli register --email owner@example.com
//! ```

use secrecy::{ExposeSecret, SecretString};

use cafe_desk_admin::config::RegistrationConfig;
use cafe_desk_admin::services::{RegistrationClient, RegistrationRequest};

use super::{TaskError, TaskResult};

/// Arguments of `register`.
#[derive(Debug)]
pub struct RegisterArgs {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: SecretString,
    pub shop_name: String,
}

impl RegisterArgs {
    fn into_request(self) -> Result<RegistrationRequest, TaskError> {
        if self.email.is_none() && self.phone.is_none() {
            return Err(TaskError::InvalidArgument(
                "either --email or --phone is required".to_owned(),
            ));
        }
        Ok(RegistrationRequest {
            name: self.name,
            email: self.email,
            phone: self.phone,
            password: self.password.expose_secret().to_owned(),
            shop_name: self.shop_name,
        })
    }
}

/// Send the registration request.
pub async fn run(args: RegisterArgs) -> TaskResult {
    let request = args.into_request()?;
    let config = RegistrationConfig::from_env()?;
    let client = RegistrationClient::new(&config.base_url)?;

    tracing::info!(endpoint = %client.endpoint(), "Registering {}", request.name);
    let response = client.register(&request).await?;

    Ok(vec![
        format!("Status: {}", response.status),
        format!("Body: {}", response.body),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_requires_contact() {
        let args = RegisterArgs {
            name: "Test Owner".to_owned(),
            email: None,
            phone: None,
            password: SecretString::from("password123"),
            shop_name: "Test Cafe".to_owned(),
        };
        assert!(matches!(
            args.into_request(),
            Err(TaskError::InvalidArgument(_))
        ));
    }
}
