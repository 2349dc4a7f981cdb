use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod backend;
mod cli;
mod commands;
mod output;

use backend::Workspace;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable in JSON mode
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("egytravel=info")),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {e:?}");
            eprintln!("Error: {}", user_message(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

/// The site's wording for library errors, `Display` for anything else.
fn user_message(err: &(dyn std::error::Error + 'static)) -> String {
    match err.downcast_ref::<egytravel::Error>() {
        Some(err) => err.user_message(),
        None => err.to_string(),
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = cli.format;
    let open = || Workspace::open(&cli.store);

    match cli.command {
        Commands::Signup(args) => commands::account::signup(&mut open().await?, args, format).await,
        Commands::Login(args) => commands::account::login(&mut open().await?, args, format).await,
        Commands::Logout => commands::account::logout(&mut open().await?, format).await,
        Commands::Whoami => commands::account::whoami(&open().await?, format),
        Commands::Favorites(command) => {
            commands::favorites::run(&mut open().await?, command, format).await
        }
        Commands::Users(command) => commands::users::run(&open().await?, command, format).await,
        Commands::Search(args) => commands::catalog::search(&args, format),
        Commands::Hotels => commands::catalog::hotels(format),
        Commands::Info => commands::info::run(&open().await?, format).await,
    }
}
