//! Client for the auth service's registration endpoint.
//!
//! Any HTTP response, success or not, is returned as a
//! [`RegistrationResponse`]; only transport failures are errors.

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Path appended to the configured base URL.
pub const REGISTER_PATH: &str = "auth/register";

/// Errors that can occur when calling the registration endpoint.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Connection refused, DNS failure, TLS failure, ...
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid registration URL: {0}")]
    Url(#[from] url::ParseError),
}

/// JSON body sent to `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
    pub shop_name: String,
}

/// Status and raw body text of the endpoint's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Registration API client.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl RegistrationClient {
    /// Create a client for `{base_url}/auth/register`.
    ///
    /// A path on the base URL is kept (`http://host/api` posts to
    /// `http://host/api/auth/register`).
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint URL cannot be built or the HTTP client
    /// fails to build.
    pub fn new(base_url: &Url) -> Result<Self, RegistrationError> {
        let endpoint = endpoint_for(base_url)?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one registration request.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::Http` if the target cannot be reached or
    /// the body cannot be read.
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, RegistrationError> {
        tracing::debug!(endpoint = %self.endpoint, "Sending registration request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(RegistrationResponse { status, body })
    }
}

fn endpoint_for(base_url: &Url) -> Result<Url, url::ParseError> {
    let base = base_url.as_str().trim_end_matches('/');
    Url::parse(&format!("{base}/{REGISTER_PATH}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_for_root_base() {
        let base = Url::parse("http://localhost:4000").unwrap();
        assert_eq!(
            endpoint_for(&base).unwrap().as_str(),
            "http://localhost:4000/auth/register"
        );
    }

    #[test]
    fn test_endpoint_for_keeps_base_path() {
        let base = Url::parse("https://api.cafe.example/v1/").unwrap();
        assert_eq!(
            endpoint_for(&base).unwrap().as_str(),
            "https://api.cafe.example/v1/auth/register"
        );
    }

    #[test]
    fn test_request_serializes_camel_case_without_missing_contact() {
        let request = RegistrationRequest {
            name: "Test Owner".to_owned(),
            email: Some("owner@cafe.example".to_owned()),
            phone: None,
            password: "pw".to_owned(),
            shop_name: "Test Cafe".to_owned(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["shopName"], "Test Cafe");
        assert_eq!(json["email"], "owner@cafe.example");
        assert!(json.get("phone").is_none());
    }
}
