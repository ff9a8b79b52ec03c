//! Config subcommand handlers.

use std::fmt::Write as _;

use dialoguer::{Input, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config for display, masking the plaintext token.
fn format_config_redacted(cfg: &Config) -> String {
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);
    let _ = writeln!(out, "page_limit = {}", cfg.defaults.page_limit);
    let _ = writeln!(out, "insecure = {}", cfg.defaults.insecure);

    for (name, p) in &cfg.profiles {
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "api_url = \"{}\"", p.api_url);
        if p.token.is_some() {
            let _ = writeln!(out, "token = \"****\"");
        }
        if let Some(ref env) = p.token_env {
            let _ = writeln!(out, "token_env = \"{env}\"");
        }
        if let Some(limit) = p.page_limit {
            let _ = writeln!(out, "page_limit = {limit}");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
    }

    out.trim_end().to_owned()
}

/// Copy of `cfg` safe to serialize for `config show -o json|yaml`.
fn redacted(cfg: &Config) -> Config {
    let mut cfg = cfg.clone();
    for profile in cfg.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some("****".into());
        }
    }
    cfg
}

fn prompt_token() -> Result<String, CliError> {
    let token = rpassword::prompt_password("Bearer token: ").map_err(prompt_err)?;
    let token = token.trim().to_owned();
    if token.is_empty() {
        return Err(CliError::Validation {
            field: "token".into(),
            reason: "token cannot be empty".into(),
        });
    }
    Ok(token)
}

/// Ask where the profile's token should live and fill in `profile`.
fn prompt_token_storage(profile_name: &str, profile: &mut Profile) -> Result<(), CliError> {
    let choices = &[
        "System keyring (recommended)",
        "Config file (plaintext)",
        "Environment variable",
        "Skip, sign in later with `maison login`",
    ];
    let selection = Select::new()
        .with_prompt("Where should the bearer token come from?")
        .items(choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    match selection {
        0 => {
            config::store_token(profile_name, &prompt_token()?)?;
            eprintln!("   ✓ token stored in system keyring");
        }
        1 => profile.token = Some(prompt_token()?),
        2 => {
            let var: String = Input::new()
                .with_prompt("Variable name")
                .default("MAISON_TOKEN".into())
                .interact_text()
                .map_err(prompt_err)?;
            profile.token_env = Some(var);
        }
        _ => {}
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("Maison configuration");
            eprintln!("   Config path: {}\n", config_path.display());

            let mut cfg = config::load_config_or_default();

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default(config::active_profile_name(global, &cfg))
                .interact_text()
                .map_err(prompt_err)?;

            let api_url: String = Input::new()
                .with_prompt("API URL")
                .default("http://localhost:3000/api".into())
                .validate_with(|s: &String| {
                    url::Url::parse(s.trim())
                        .map(|_| ())
                        .map_err(|e| format!("invalid URL: {e}"))
                })
                .interact_text()
                .map_err(prompt_err)?;

            let mut profile = Profile {
                api_url: api_url.trim().to_owned(),
                ..Profile::default()
            };
            prompt_token_storage(&profile_name, &mut profile)?;

            cfg.profiles.insert(profile_name.clone(), profile);
            if cfg.default_profile.is_none() || cfg.profiles.len() == 1 {
                cfg.default_profile = Some(profile_name.clone());
            }
            let written = config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", written.display());
            eprintln!("  Profile: {profile_name}");
            eprintln!("\n  Try it: maison catalog");
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = redacted(&config::load_config_or_default());
            let out = output::render_single(global.output, &cfg, format_config_redacted, |_| {
                config::config_path().display().to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::SetToken => {
            let cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);
            config::store_token(&profile_name, &prompt_token()?)?;
            if !global.quiet {
                eprintln!("✓ token stored in system keyring for profile '{profile_name}'");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Config {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "shop".into(),
            Profile {
                api_url: "https://shop.example.com/api".into(),
                token: Some("secret-token".into()),
                page_limit: Some(20),
                ..Profile::default()
            },
        );
        cfg
    }

    #[test]
    fn show_masks_plaintext_token() {
        let text = format_config_redacted(&sample());
        assert!(text.contains("[profiles.shop]"));
        assert!(text.contains("token = \"****\""));
        assert!(text.contains("page_limit = 20"));
        assert!(!text.contains("secret-token"));
    }

    #[test]
    fn structured_show_masks_token() {
        let cfg = redacted(&sample());
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(!json.contains("secret-token"));
        assert!(json.contains("****"));
    }
}
