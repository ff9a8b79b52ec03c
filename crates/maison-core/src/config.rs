// ── Runtime connection configuration ──
//
// These types describe *how* to reach the catalog API. They carry the
// bearer token and connection tuning, but never touch disk. The CLI
// builds a `ClientConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use maison_api::{ApiClient, TlsMode, TransportConfig};

use crate::error::CoreError;

/// Page size of the admin perfume table.
pub const DASHBOARD_PAGE_LIMIT: u32 = 10;
/// Page size of the storefront grid.
pub const CATALOG_PAGE_LIMIT: u32 = 12;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (local development servers).
    DangerAcceptInvalid,
}

/// Configuration for talking to one catalog API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root (e.g., `https://shop.example.com/api`).
    pub api_url: Url,
    /// Bearer token; `None` for anonymous storefront access.
    pub token: Option<SecretString>,
    pub tls: TlsVerification,
    pub timeout: Duration,
    /// Admin perfume table page size.
    pub page_limit: u32,
    /// Storefront page size.
    pub catalog_limit: u32,
}

impl ClientConfig {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            token: None,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            page_limit: DASHBOARD_PAGE_LIMIT,
            catalog_limit: CATALOG_PAGE_LIMIT,
        }
    }

    /// Build the HTTP gateway for this configuration.
    pub fn build_client(&self) -> Result<ApiClient, CoreError> {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        let transport = TransportConfig {
            tls,
            timeout: self.timeout,
            token: self.token.clone(),
        };
        Ok(ApiClient::new(self.api_url.clone(), &transport)?)
    }
}
