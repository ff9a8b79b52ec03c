//! Shared configuration for Maison tools.
//!
//! TOML profiles, bearer-token resolution (flag, env, keyring, plaintext),
//! and translation to `maison_core::ClientConfig`. The CLI layers its
//! global flags on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use maison_core::{ClientConfig, TlsVerification};
use maison_core::config::{CATALOG_PAGE_LIMIT, DASHBOARD_PAGE_LIMIT};

const KEYRING_SERVICE: &str = "maison";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found in config")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when `--profile` is not given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named API profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Name of the profile to use: the explicit one, else `default_profile`,
    /// else `"default"`.
    pub fn active_profile_name(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_owned)
            .or_else(|| self.default_profile.clone())
            .unwrap_or_else(|| "default".into())
    }

    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile { name: name.into() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Admin perfume table page size.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    #[serde(default)]
    pub insecure: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
            page_limit: default_page_limit(),
            insecure: false,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_page_limit() -> u32 {
    DASHBOARD_PAGE_LIMIT
}

/// A named API profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// API root (e.g., "https://shop.example.com/api").
    pub api_url: String,

    /// Bearer token in plaintext. Prefer the keyring or `token_env`.
    pub token: Option<String>,

    /// Environment variable holding the bearer token.
    pub token_env: Option<String>,

    pub page_limit: Option<u32>,

    pub timeout: Option<u64>,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    pub insecure: Option<bool>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "maison", "maison").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("maison");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Defaults, then the TOML file at `path` (if present), then `MAISON_`
/// variables (`MAISON_DEFAULTS__TIMEOUT=5` sets `defaults.timeout`).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("MAISON_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if it can't be read.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Token resolution ────────────────────────────────────────────────

fn keyring_entry(profile_name: &str) -> Result<keyring::Entry, ConfigError> {
    Ok(keyring::Entry::new(
        KEYRING_SERVICE,
        &format!("{profile_name}/token"),
    )?)
}

/// Store a profile's bearer token in the system keyring.
pub fn store_token(profile_name: &str, token: &str) -> Result<(), ConfigError> {
    keyring_entry(profile_name)?.set_password(token)?;
    Ok(())
}

/// Resolve the bearer token for a profile.
///
/// Order: explicit flag, the profile's `token_env` variable, the system
/// keyring, then the plaintext `token`. `None` means anonymous access.
pub fn resolve_token(
    profile: &Profile,
    profile_name: &str,
    flag: Option<&str>,
) -> Option<SecretString> {
    resolve_token_with(profile, flag, || {
        keyring_entry(profile_name)
            .ok()
            .and_then(|entry| entry.get_password().ok())
    })
}

fn resolve_token_with(
    profile: &Profile,
    flag: Option<&str>,
    from_keyring: impl FnOnce() -> Option<String>,
) -> Option<SecretString> {
    if let Some(token) = flag {
        return Some(SecretString::from(token.to_owned()));
    }

    if let Some(val) = profile
        .token_env
        .as_deref()
        .and_then(|name| std::env::var(name).ok())
    {
        return Some(SecretString::from(val));
    }

    if let Some(secret) = from_keyring() {
        return Some(SecretString::from(secret));
    }

    profile.token.clone().map(SecretString::from)
}

// ── Translation ─────────────────────────────────────────────────────

/// Build a `ClientConfig` from a profile and the global defaults. The
/// token is passed in already resolved.
pub fn profile_to_client_config(
    profile: &Profile,
    defaults: &Defaults,
    token: Option<SecretString>,
) -> Result<ClientConfig, ConfigError> {
    let api_url: url::Url = profile
        .api_url
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL: {}", profile.api_url),
        })?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let page_limit = profile.page_limit.unwrap_or(defaults.page_limit);
    if page_limit == 0 {
        return Err(ConfigError::Validation {
            field: "page_limit".into(),
            reason: "must be at least 1".into(),
        });
    }

    Ok(ClientConfig {
        api_url,
        token,
        tls,
        timeout: Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)),
        page_limit,
        catalog_limit: CATALOG_PAGE_LIMIT,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    fn profile(api_url: &str) -> Profile {
        Profile {
            api_url: api_url.into(),
            ..Profile::default()
        }
    }

    // ── Loading ──

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.defaults.page_limit, 10);
    }

    #[test]
    fn save_then_load_keeps_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.profiles.insert(
            "shop".into(),
            Profile {
                token_env: Some("SHOP_TOKEN".into()),
                page_limit: Some(25),
                ..profile("https://shop.example.com/api")
            },
        );
        cfg.default_profile = Some("shop".into());
        save_config_to(&cfg, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.active_profile_name(None), "shop");
        assert_eq!(loaded.active_profile_name(Some("other")), "other");
    }

    #[test]
    fn env_overlays_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    [defaults]
                    timeout = 60

                    [profiles.local]
                    api_url = "http://localhost:5000/api"
                "#,
            )?;
            jail.set_env("MAISON_DEFAULTS__TIMEOUT", "5");
            jail.set_env("MAISON_DEFAULT_PROFILE", "local");

            let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg.defaults.timeout, 5);
            assert_eq!(cfg.default_profile.as_deref(), Some("local"));
            assert!(cfg.profile("local").is_ok());
            Ok(())
        });
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let err = Config::default().profile("ghost").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile { name } if name == "ghost"));
    }

    // ── Token resolution ──

    #[test]
    fn flag_wins_over_everything() {
        let p = Profile {
            token: Some("plain".into()),
            ..profile("http://x")
        };
        let token = resolve_token_with(&p, Some("flag"), || Some("keyring".into())).unwrap();
        assert_eq!(token.expose_secret(), "flag");
    }

    #[test]
    fn keyring_beats_plaintext() {
        let p = Profile {
            token: Some("plain".into()),
            ..profile("http://x")
        };
        let token = resolve_token_with(&p, None, || Some("keyring".into())).unwrap();
        assert_eq!(token.expose_secret(), "keyring");

        let token = resolve_token_with(&p, None, || None).unwrap();
        assert_eq!(token.expose_secret(), "plain");
    }

    #[test]
    fn unset_token_env_falls_through() {
        let p = Profile {
            token_env: Some("MAISON_TEST_TOKEN_THAT_IS_NEVER_SET".into()),
            ..profile("http://x")
        };
        assert!(resolve_token_with(&p, None, || None).is_none());
    }

    // ── Translation ──

    #[test]
    fn profile_overrides_defaults() {
        let p = Profile {
            page_limit: Some(20),
            timeout: Some(5),
            ca_cert: Some(PathBuf::from("/etc/maison/ca.pem")),
            ..profile("https://shop.example.com/api")
        };
        let cfg = profile_to_client_config(&p, &Defaults::default(), None).unwrap();

        assert_eq!(cfg.page_limit, 20);
        assert_eq!(cfg.catalog_limit, 12);
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(
            cfg.tls,
            TlsVerification::CustomCa(PathBuf::from("/etc/maison/ca.pem"))
        );
        assert!(cfg.token.is_none());
    }

    #[test]
    fn insecure_default_applies() {
        let defaults = Defaults {
            insecure: true,
            ..Defaults::default()
        };
        let cfg = profile_to_client_config(&profile("http://x/api"), &defaults, None).unwrap();
        assert_eq!(cfg.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn bad_url_and_zero_limit_rejected() {
        let err = profile_to_client_config(&profile("not a url"), &Defaults::default(), None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "api_url"));

        let p = Profile {
            page_limit: Some(0),
            ..profile("http://x/api")
        };
        assert!(profile_to_client_config(&p, &Defaults::default(), None).is_err());
    }
}
