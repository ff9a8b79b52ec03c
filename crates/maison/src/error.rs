//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text and a stable exit code.

use miette::Diagnostic;
use thiserror::Error;

use maison_config::ConfigError;
use maison_core::{CoreError, FormErrors};

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the catalog API at {url}")]
    #[diagnostic(
        code(maison::connection_failed),
        help(
            "Check that the API server is running and the URL is right.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(maison::timeout),
        help("Increase the timeout with --timeout or check server responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(maison::auth_failed),
        help("Your token may have expired. Run: maison login")
    )]
    AuthFailed { message: String },

    #[error("No access token for profile '{profile}'")]
    #[diagnostic(
        code(maison::no_token),
        help(
            "Sign in with: maison login\n\
             Or set MAISON_TOKEN / pass --token."
        )
    )]
    NoToken { profile: String },

    #[error("Permission denied: {message}")]
    #[diagnostic(
        code(maison::permission_denied),
        help("This command needs an administrator account.")
    )]
    PermissionDenied { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(maison::not_found), help("Run: maison {list_command} to see what exists"))]
    NotFound {
        message: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error: {message}")]
    #[diagnostic(code(maison::api_error))]
    ApiError { message: String, status: Option<u16> },

    /// A coordinator operation reported failure; details are in the logs.
    #[error("{message}")]
    #[diagnostic(
        code(maison::operation_failed),
        help("Re-run with -v to see the underlying error.")
    )]
    OperationFailed { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(maison::validation))]
    Validation { field: String, reason: String },

    #[error("Please fix the highlighted fields: {errors}")]
    #[diagnostic(code(maison::invalid_form))]
    InvalidForm { errors: FormErrors },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No API URL configured")]
    #[diagnostic(
        code(maison::no_config),
        help(
            "Create a profile with: maison config init\n\
             Or pass --api-url. Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(maison::config))]
    Config(#[from] ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Prompt failed: {0}")]
    #[diagnostic(code(maison::prompt))]
    Prompt(String),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::AuthFailed { .. }
            | Self::NoToken { .. }
            | Self::ApiError {
                status: Some(401), ..
            } => exit_code::AUTH,
            Self::PermissionDenied { .. }
            | Self::ApiError {
                status: Some(403), ..
            } => exit_code::PERMISSION,
            Self::NotFound { .. }
            | Self::ApiError {
                status: Some(404), ..
            } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::InvalidForm { .. } | Self::NoConfig { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::Timeout { timeout_secs } => Self::Timeout {
                seconds: timeout_secs,
            },
            CoreError::AuthenticationFailed { message } => Self::AuthFailed { message },
            CoreError::PermissionDenied { message } => Self::PermissionDenied { message },
            CoreError::NotAdmin => Self::PermissionDenied {
                message: "administrator account required".into(),
            },
            CoreError::NotFound { message } => Self::NotFound {
                message,
                list_command: "catalog".into(),
            },
            CoreError::ValidationFailed { errors } => Self::InvalidForm { errors },
            CoreError::Api { message, status } => Self::ApiError { message, status },
            CoreError::Config { message } => Self::Validation {
                field: "config".into(),
                reason: message,
            },
            CoreError::Internal(message) => Self::Internal(message),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use maison_core::validation;

    use super::*;

    #[test]
    fn exit_codes_by_category() {
        let cases = [
            (CoreError::AuthenticationFailed { message: "x".into() }, 3),
            (CoreError::NotFound { message: "x".into() }, 4),
            (CoreError::Timeout { timeout_secs: 5 }, 8),
            (
                CoreError::ConnectionFailed {
                    url: "u".into(),
                    reason: "r".into(),
                },
                7,
            ),
            (CoreError::Internal("x".into()), 1),
            (
                CoreError::ValidationFailed {
                    errors: validation::brand_form(""),
                },
                2,
            ),
        ];
        for (core, code) in cases {
            assert_eq!(CliError::from(core).exit_code(), code);
        }
    }

    #[test]
    fn form_errors_name_the_field() {
        let err = CliError::from(CoreError::ValidationFailed {
            errors: validation::brand_form(" "),
        });
        assert_eq!(
            err.to_string(),
            "Please fix the highlighted fields: brandName: Brand name is required"
        );
    }
}
