// ── Core error types ──
//
// User-facing errors from maison-core. Consumers never see HTTP status
// codes or JSON parse failures directly; the `From<maison_api::Error>`
// impl translates transport-layer errors into domain variants.

use thiserror::Error;

use crate::validation::FormErrors;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach catalog API at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Not found: {message}")]
    NotFound { message: String },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed: {errors}")]
    ValidationFailed { errors: FormErrors },

    #[error("This operation requires an administrator account")]
    NotAdmin,

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Validation errors as a map, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FormErrors> {
        match self {
            Self::ValidationFailed { errors } => Some(errors),
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<maison_api::Error> for CoreError {
    fn from(err: maison_api::Error) -> Self {
        match err {
            maison_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            maison_api::Error::Forbidden { message } => CoreError::PermissionDenied { message },
            maison_api::Error::NotFound { message } => CoreError::NotFound { message },
            maison_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            maison_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            maison_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            maison_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            maison_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            maison_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_maps_to_permission_denied() {
        let err = CoreError::from(maison_api::Error::Forbidden {
            message: "Admins only".into(),
        });
        assert!(matches!(err, CoreError::PermissionDenied { ref message } if message == "Admins only"));
    }

    #[test]
    fn api_status_is_preserved() {
        let err = CoreError::from(maison_api::Error::Api {
            status: 409,
            message: "in use".into(),
        });
        assert!(matches!(err, CoreError::Api { status: Some(409), .. }));
    }
}
