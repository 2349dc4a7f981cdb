//! Account administration commands.

use serde::Serialize;

use crate::backend::Workspace;
use crate::cli::UsersCommand;
use crate::output::{OutputFormat, print_json, print_table};

/// JSON result of `users delete`.
#[derive(Serialize)]
struct Deleted<'a> {
    email: &'a str,
    deleted: bool,
}

/// Run a `users` subcommand
pub async fn run(
    workspace: &Workspace,
    command: UsersCommand,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let admin = workspace.site.admin()?;

    match command {
        UsersCommand::List { query } => {
            let query = query.unwrap_or_default();
            let users = admin.search_users(&query).await?;
            match format {
                OutputFormat::Human => {
                    if users.is_empty() {
                        println!("No users match \"{query}\".");
                        return Ok(());
                    }
                    let rows: Vec<Vec<String>> = users
                        .iter()
                        .map(|user| vec![user.email.clone(), user.name.clone()])
                        .collect();
                    print_table(&["EMAIL", "NAME"], &rows);
                }
                OutputFormat::Json => print_json(&users)?,
            }
        }
        UsersCommand::Delete { email } => {
            admin.delete_user(&email).await?;
            workspace.save().await?;
            match format {
                OutputFormat::Human => println!("Deleted {email}"),
                OutputFormat::Json => print_json(&Deleted {
                    email: &email,
                    deleted: true,
                })?,
            }
        }
    }
    Ok(())
}
