//! Clap derive structures for the `maison` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// maison -- browse and administer a Maison fragrance catalog
#[derive(Debug, Parser)]
#[command(
    name = "maison",
    version,
    about = "Browse and administer a Maison fragrance catalog from the command line",
    long_about = "Browse the public perfume catalog, manage your collector profile,\n\
        and administer members, maisons (brands), and fragrances.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config profile to use
    #[arg(long, short = 'p', env = "MAISON_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Catalog API root URL (overrides profile)
    #[arg(long, short = 'u', env = "MAISON_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer token (overrides env, keyring, and config)
    #[arg(long, env = "MAISON_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "MAISON_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "MAISON_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the access token for the active profile
    Login(LoginArgs),

    /// Create a collector account
    Register(RegisterArgs),

    /// Show or edit your collector profile
    #[command(alias = "me")]
    Profile(ProfileArgs),

    /// Browse the public fragrance catalog
    #[command(alias = "shop")]
    Catalog(CatalogArgs),

    /// Show one fragrance with its reviews
    Perfume {
        /// Perfume ID
        id: String,
    },

    /// Review a fragrance
    Review(ReviewArgs),

    /// Render the admin dashboard for a view location
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Manage maisons (brands)
    #[command(alias = "b")]
    Brands(BrandsArgs),

    /// Manage fragrances
    #[command(alias = "p")]
    Perfumes(PerfumesArgs),

    /// List registered collectors
    #[command(alias = "m")]
    Members(MembersArgs),

    /// Show dashboard counters
    Stats,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Arguments ─────────────────────────────────────────────────

/// Client-side filtering and ordering for admin tables.
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Case-insensitive substring filter
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Sort as `field[:asc|desc]` (name, email, year, brand, price)
    #[arg(long, short = 's')]
    pub sort: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ACCOUNT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email (prompted when omitted)
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Print the token instead of storing it in the keyring
    #[arg(long)]
    pub print_token: bool,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Account email
    #[arg(long, short = 'e')]
    pub email: String,

    /// Year of birth
    #[arg(long)]
    pub year: String,

    /// Gender
    #[arg(long, value_enum, default_value = "female")]
    pub gender: GenderArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl GenderArg {
    pub fn is_male(self) -> bool {
        self == Self::Male
    }
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show your profile
    Show,

    /// Update name, year of birth, or gender
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
    },

    /// Change your password (prompts for old and new)
    Password,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CATALOG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Page to show
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Search term (name or description)
    #[arg(long)]
    pub search: Option<String>,

    /// Only show this maison
    #[arg(long)]
    pub brand: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReviewArgs {
    /// Perfume ID
    pub id: String,

    /// Rating from 1 to 5
    #[arg(long, short = 'r')]
    pub rating: u8,

    /// Review text
    #[arg(long, short = 'c')]
    pub content: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DASHBOARD
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// View location as a query string, e.g. "tab=perfumes&page=2&q=rose"
    #[arg(long)]
    pub view: Option<String>,

    /// Tab to show (overrides --view)
    #[arg(long, value_enum)]
    pub tab: Option<TabArg>,

    /// Perfume page (overrides --view)
    #[arg(long)]
    pub page: Option<u32>,

    /// Perfume search (overrides --view)
    #[arg(long)]
    pub search: Option<String>,

    /// Sort the active table as `field[:asc|desc]`
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Members,
    Brands,
    Perfumes,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BRANDS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BrandsArgs {
    #[command(subcommand)]
    pub command: BrandsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BrandsCommand {
    /// List maisons
    #[command(alias = "ls")]
    List(TableArgs),

    /// Add a maison
    Create {
        /// Maison name
        name: String,
    },

    /// Rename a maison
    Update {
        /// Brand ID
        id: String,

        /// New name
        name: String,
    },

    /// Remove a maison
    #[command(alias = "rm")]
    Delete {
        /// Brand ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PERFUMES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PerfumesArgs {
    #[command(subcommand)]
    pub command: PerfumesCommand,
}

#[derive(Debug, Subcommand)]
pub enum PerfumesCommand {
    /// List one page of fragrances
    #[command(alias = "ls")]
    List {
        /// Page to show
        #[arg(long, default_value = "1")]
        page: u32,

        /// Server-side search
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Add a fragrance
    Create(PerfumeFields),

    /// Edit a fragrance; omitted fields keep their current value
    Update {
        /// Perfume ID
        id: String,

        #[command(flatten)]
        fields: PerfumeFields,
    },

    /// Remove a fragrance
    #[command(alias = "rm")]
    Delete {
        /// Perfume ID
        id: String,
    },
}

/// Perfume form fields. Text is validated before anything is sent.
#[derive(Debug, Default, Args)]
pub struct PerfumeFields {
    /// Fragrance name
    #[arg(long)]
    pub name: Option<String>,

    /// Image URL (http or https)
    #[arg(long)]
    pub image_url: Option<String>,

    /// Price
    #[arg(long)]
    pub price: Option<String>,

    /// Volume in ml
    #[arg(long)]
    pub volume: Option<String>,

    /// Concentration: EDP, EDT, Extrait, Cologne
    #[arg(long)]
    pub concentration: Option<String>,

    /// Target audience: unisex, male, female
    #[arg(long)]
    pub audience: Option<String>,

    /// Maison ID or name
    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub ingredients: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MEMBERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MembersArgs {
    #[command(subcommand)]
    pub command: MembersCommand,
}

#[derive(Debug, Subcommand)]
pub enum MembersCommand {
    /// List collectors
    #[command(alias = "ls")]
    List(TableArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration with secrets masked
    Show,

    /// Store a bearer token for the active profile in the system keyring
    SetToken,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
