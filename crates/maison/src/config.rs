//! CLI configuration: a thin wrapper around `maison_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--api-url, --token, --timeout).

use std::time::Duration;

use secrecy::SecretString;

use maison_core::ClientConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use maison_config::{
    Config, Profile, config_path, load_config_or_default, save_config, store_token,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.active_profile_name(global.profile.as_deref())
}

/// Build the runtime `ClientConfig`: profile values first, then flags.
///
/// Without a matching profile, `--api-url` is required, `[defaults]`
/// still applies, and the token can only come from `--token` /
/// `MAISON_TOKEN`.
pub fn resolve_client_config(global: &GlobalOpts, cfg: &Config) -> Result<ClientConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    let mut client = if let Some(profile) = cfg.profiles.get(&profile_name) {
        let token = maison_config::resolve_token(profile, &profile_name, global.token.as_deref());
        maison_config::profile_to_client_config(profile, &cfg.defaults, token)?
    } else {
        let url_str = global.api_url.as_deref().ok_or_else(|| CliError::NoConfig {
            path: config_path().display().to_string(),
        })?;
        parse_url(url_str)?;
        let flags_only = Profile {
            api_url: url_str.to_owned(),
            ..Profile::default()
        };
        let token = global.token.clone().map(SecretString::from);
        maison_config::profile_to_client_config(&flags_only, &cfg.defaults, token)?
    };

    if let Some(ref url_str) = global.api_url {
        client.api_url = parse_url(url_str)?;
    }
    if let Some(secs) = global.timeout {
        client.timeout = Duration::from_secs(secs);
    }
    Ok(client)
}

fn parse_url(url_str: &str) -> Result<url::Url, CliError> {
    url_str.parse().map_err(|_| CliError::Validation {
        field: "api-url".into(),
        reason: format!("invalid URL: {url_str}"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use maison_config::Defaults;
    use maison_core::TlsVerification;

    use super::*;
    use crate::cli::Cli;

    fn global(argv: &[&str]) -> GlobalOpts {
        let mut full = vec!["maison"];
        full.extend_from_slice(argv);
        full.push("dashboard");
        Cli::try_parse_from(full).unwrap().global
    }

    fn without_profiles(defaults: Defaults) -> Config {
        Config {
            default_profile: None,
            defaults,
            profiles: std::collections::BTreeMap::new(),
        }
    }

    #[test]
    fn flags_only_rejects_zero_page_limit() {
        let cfg = without_profiles(Defaults {
            page_limit: 0,
            ..Defaults::default()
        });
        let err = resolve_client_config(&global(&["--api-url", "http://shop.test/api"]), &cfg)
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn flags_only_applies_defaults() {
        let cfg = without_profiles(Defaults {
            insecure: true,
            page_limit: 25,
            timeout: 7,
            ..Defaults::default()
        });
        let client = resolve_client_config(
            &global(&["--api-url", "http://shop.test/api", "--token", "t0k"]),
            &cfg,
        )
        .unwrap();

        assert_eq!(client.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(client.page_limit, 25);
        assert_eq!(client.timeout, Duration::from_secs(7));
        assert_eq!(client.api_url.as_str(), "http://shop.test/api");
        assert!(client.token.is_some());
    }

    #[test]
    fn flags_only_needs_api_url() {
        let cfg = without_profiles(Defaults::default());
        let err = resolve_client_config(&global(&[]), &cfg).unwrap_err();
        assert!(matches!(err, CliError::NoConfig { .. }));
    }

    #[test]
    fn flags_only_bad_url_is_a_usage_error() {
        let cfg = without_profiles(Defaults::default());
        let err = resolve_client_config(&global(&["--api-url", "not a url"]), &cfg).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::exit_code::USAGE);
    }
}
