//! CLI argument definitions for the Egytravel binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Egytravel account, session and favorites tool
#[derive(Parser, Debug)]
#[command(name = "egytravel")]
#[command(about = "Egytravel: accounts, sessions and favorites for the Egypt travel site")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true, env = "EGYTRAVEL_FORMAT")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the site state lives and how the account service behaves.
#[derive(clap::Args, Debug, Clone)]
pub struct StoreArgs {
    /// Data directory holding egytravel.json
    #[arg(short = 'D', long, global = true, env = "EGYTRAVEL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// JSON file overriding storage keys and latency
    #[arg(short, long, global = true, env = "EGYTRAVEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Delay account operations the way the site's mock service does
    #[arg(long, global = true, env = "EGYTRAVEL_SIMULATE_LATENCY")]
    pub simulate_latency: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and log into it
    Signup(SignupArgs),
    /// Log into an existing account
    Login(LoginArgs),
    /// End the current session
    Logout,
    /// Show the logged-in account
    Whoami,
    /// Manage the favorites of the logged-in account
    #[command(subcommand)]
    Favorites(FavoritesCommand),
    /// Administer accounts (administrator only)
    #[command(subcommand)]
    Users(UsersCommand),
    /// Search destinations by name
    Search(SearchArgs),
    /// List hotel offers
    Hotels,
    /// Show data file, session and counts
    Info,
}

/// Arguments for the signup command
///
/// Missing values are accepted here and reported by form validation.
#[derive(clap::Args, Debug)]
pub struct SignupArgs {
    #[arg(long, default_value = "", hide_default_value = true)]
    pub name: String,

    #[arg(long, default_value = "", hide_default_value = true)]
    pub email: String,

    #[arg(long, default_value = "", hide_default_value = true)]
    pub password: String,

    #[arg(long, default_value = "", hide_default_value = true)]
    pub confirm_password: String,
}

/// Arguments for the login command
#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    #[arg(long, default_value = "", hide_default_value = true)]
    pub email: String,

    #[arg(long, default_value = "", hide_default_value = true)]
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// List saved hotels
    List,
    /// Save a hotel by id
    Add { hotel_id: u64 },
    /// Remove a saved hotel by id
    Remove { hotel_id: u64 },
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List accounts, optionally filtered by email or name
    List {
        /// Text to match, ignoring case; omit to list everyone
        query: Option<String>,
    },
    /// Delete an account
    Delete { email: String },
}

/// Arguments for the search command
#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Text to match; omit for popular destinations
    pub query: Option<String>,
}
