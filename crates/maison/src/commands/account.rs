//! Sign-in, registration, and profile handlers.

use dialoguer::Input;
use secrecy::SecretString;

use maison_core::{
    CoreError, FormErrors, MemberProfile, PasswordChange, ProfileUpdate, RegisterRequest,
    validation,
};

use crate::cli::{GenderArg, GlobalOpts, LoginArgs, ProfileArgs, ProfileCommand, RegisterArgs};
use crate::config;
use crate::error::CliError;
use crate::output;

use super::Session;
use super::util::prompt_err;

fn ensure_valid(errors: FormErrors) -> Result<(), CliError> {
    if errors.is_valid() {
        Ok(())
    } else {
        Err(CliError::InvalidForm { errors })
    }
}

fn parse_year(value: &str) -> Result<i32, CliError> {
    value.trim().parse().map_err(|_| CliError::Validation {
        field: "year".into(),
        reason: "Invalid year".into(),
    })
}

// ── Login / register ────────────────────────────────────────────────

pub async fn login(args: LoginArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let email = match args.email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(prompt_err)?,
    };
    let password = rpassword::prompt_password("Password: ").map_err(prompt_err)?;
    ensure_valid(validation::login_form(&email, &password))?;

    let auth = session
        .api
        .login(email.trim(), &SecretString::from(password))
        .await
        .map_err(CoreError::from)?;

    if args.print_token {
        output::print_output(&auth.access_token, false);
    } else {
        config::store_token(&session.profile, &auth.access_token)?;
    }

    if !global.quiet {
        let role = if auth.user.is_admin {
            "administrator"
        } else {
            "collector"
        };
        eprintln!("Signed in as {} <{}> ({role})", auth.user.name, auth.user.email);
    }
    Ok(())
}

pub async fn register(
    args: RegisterArgs,
    session: &Session,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let password = rpassword::prompt_password("Password: ").map_err(prompt_err)?;
    ensure_valid(validation::register_form(
        &args.name,
        &args.email,
        &password,
        &args.year,
    ))?;
    let confirm = rpassword::prompt_password("Confirm password: ").map_err(prompt_err)?;
    if confirm != password {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "passwords do not match".into(),
        });
    }

    let request = RegisterRequest {
        email: args.email.trim().to_owned(),
        password,
        name: args.name.trim().to_owned(),
        year_of_birth: parse_year(&args.year)?,
        is_male: args.gender.is_male(),
    };
    let response = session
        .api
        .register(&request)
        .await
        .map_err(CoreError::from)?;

    if !global.quiet {
        eprintln!("{}", response.message);
        eprintln!("Sign in with: maison login --email {}", request.email);
    }
    Ok(())
}

// ── Profile ─────────────────────────────────────────────────────────

fn profile_detail(p: &MemberProfile) -> String {
    let gender = if p.is_male { "Male" } else { "Female" };
    [
        format!("ID:            {}", p.id),
        format!("Name:          {}", p.name),
        format!("Email:         {}", p.email),
        format!("Year of birth: {}", p.year_of_birth),
        format!("Gender:        {gender}"),
    ]
    .join("\n")
}

fn render_profile(profile: &MemberProfile, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(global.output, profile, profile_detail, |p| p.id.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn profile(args: ProfileArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    session.require_token()?;

    match args.command {
        ProfileCommand::Show => {
            let profile = session.api.get_profile().await.map_err(CoreError::from)?;
            render_profile(&profile, global)
        }

        ProfileCommand::Update { name, year, gender } => {
            let mut errors = FormErrors::new();
            if let Some(ref name) = name {
                errors.check("name", validation::name(name));
            }
            if let Some(ref year) = year {
                errors.check("yearOfBirth", validation::year_of_birth(year));
            }
            ensure_valid(errors)?;

            let update = ProfileUpdate {
                name: name.map(|n| n.trim().to_owned()),
                year_of_birth: year.as_deref().map(parse_year).transpose()?,
                is_male: gender.map(GenderArg::is_male),
            };
            if update == ProfileUpdate::default() {
                return Err(CliError::Validation {
                    field: "profile".into(),
                    reason: "nothing to update; pass --name, --year, or --gender".into(),
                });
            }
            let profile = session
                .api
                .update_profile(&update)
                .await
                .map_err(CoreError::from)?;
            render_profile(&profile, global)
        }

        ProfileCommand::Password => {
            let old_password =
                rpassword::prompt_password("Current password: ").map_err(prompt_err)?;
            let new_password = rpassword::prompt_password("New password: ").map_err(prompt_err)?;
            let mut errors = FormErrors::new();
            errors
                .check("oldPassword", validation::password(&old_password))
                .check("newPassword", validation::password(&new_password));
            ensure_valid(errors)?;

            let response = session
                .api
                .change_password(&PasswordChange {
                    old_password,
                    new_password,
                })
                .await
                .map_err(CoreError::from)?;
            if !global.quiet {
                eprintln!("{}", response.message);
            }
            Ok(())
        }
    }
}
