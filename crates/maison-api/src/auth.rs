// Authentication endpoints
//
// Login exchanges credentials for a bearer token. Attaching that token to
// later requests is the transport's job (`TransportConfig::with_token`).

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{AuthResponse, MessageResponse, RegisterRequest};

impl ApiClient {
    /// `POST /auth/login` with `{"email": "...", "password": "..."}`
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<AuthResponse, Error> {
        let url = self.endpoint("auth/login")?;
        debug!(email, "logging in");
        self.post(
            url,
            &json!({
                "email": email,
                "password": password.expose_secret(),
            }),
        )
        .await
    }

    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, Error> {
        let url = self.endpoint("auth/register")?;
        debug!(email = %request.email, "registering member");
        self.post(url, request).await
    }
}
