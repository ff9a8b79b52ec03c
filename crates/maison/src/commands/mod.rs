//! Command dispatch: bridges CLI args -> core operations -> output formatting.

pub mod account;
pub mod brands;
pub mod catalog;
pub mod config_cmd;
pub mod dashboard;
pub mod members;
pub mod perfumes;
pub mod stats;
pub mod util;

use maison_core::{ApiClient, Catalog, ClientConfig, Coordinator, DashboardOptions};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Everything a network-bound command needs.
pub struct Session {
    pub config: ClientConfig,
    pub api: ApiClient,
    pub profile: String,
}

impl Session {
    pub fn new(config: ClientConfig, profile: String) -> Result<Self, CliError> {
        let api = config.build_client()?;
        Ok(Self {
            config,
            api,
            profile,
        })
    }

    /// Fail early when the command needs a signed-in user.
    pub fn require_token(&self) -> Result<(), CliError> {
        if self.config.token.is_none() {
            return Err(CliError::NoToken {
                profile: self.profile.clone(),
            });
        }
        Ok(())
    }

    /// Dashboard coordinator. A token is required; the server decides
    /// whether it belongs to an administrator.
    pub fn coordinator(&self) -> Result<Coordinator<ApiClient>, CliError> {
        self.require_token()?;
        Ok(Coordinator::new(
            self.api.clone(),
            DashboardOptions {
                is_admin: true,
                page_limit: self.config.page_limit,
            },
        ))
    }

    pub fn catalog(&self) -> Catalog<ApiClient> {
        Catalog::with_limit(self.api.clone(), self.config.catalog_limit)
    }
}

/// Dispatch a network-bound command to its handler.
pub async fn dispatch(cmd: Command, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Login(args) => account::login(args, session, global).await,
        Command::Register(args) => account::register(args, session, global).await,
        Command::Profile(args) => account::profile(args, session, global).await,
        Command::Catalog(args) => catalog::browse(args, session, global).await,
        Command::Perfume { id } => catalog::show(&id, session, global).await,
        Command::Review(args) => catalog::review(args, session, global).await,
        Command::Dashboard(args) => dashboard::handle(args, session, global).await,
        Command::Brands(args) => brands::handle(args, session, global).await,
        Command::Perfumes(args) => perfumes::handle(args, session, global).await,
        Command::Members(args) => members::handle(args, session, global).await,
        Command::Stats => stats::handle(session, global).await,
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "config and completions are handled before dispatch".into(),
        )),
    }
}
