//! Favorites commands for the logged-in account.

use egytravel::{catalog, favorites::FavoriteItem};
use serde::Serialize;

use crate::backend::Workspace;
use crate::cli::FavoritesCommand;
use crate::output::{OutputFormat, print_json, print_table};

const NOT_LOGGED_IN: &str = "Log in to manage your favorites";

/// JSON result of `favorites add` and `favorites remove`.
#[derive(Debug, Serialize)]
struct Change {
    id: u64,
    changed: bool,
}

fn detail(item: &FavoriteItem, key: &str) -> String {
    match item.details.get(key) {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Run a `favorites` subcommand
pub async fn run(
    workspace: &mut Workspace,
    command: FavoritesCommand,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !workspace.site.is_logged_in() {
        return Err(NOT_LOGGED_IN.into());
    }

    match command {
        FavoritesCommand::List => list(workspace, format),
        FavoritesCommand::Add { hotel_id } => {
            let hotel = catalog::hotel(hotel_id).ok_or(format!("No hotel with id {hotel_id}"))?;
            let added = workspace
                .site
                .favorites_mut()
                .add(hotel.to_favorite())
                .await?;
            if added {
                workspace.save().await?;
            }
            match format {
                OutputFormat::Human if added => println!("Saved {}", hotel.title),
                OutputFormat::Human => println!("{} is already a favorite", hotel.title),
                OutputFormat::Json => print_json(&Change {
                    id: hotel_id,
                    changed: added,
                })?,
            }
            Ok(())
        }
        FavoritesCommand::Remove { hotel_id } => {
            let removed = workspace.site.favorites_mut().remove(hotel_id).await?;
            if removed {
                workspace.save().await?;
            }
            match format {
                OutputFormat::Human if removed => println!("Removed {hotel_id}"),
                OutputFormat::Human => println!("{hotel_id} is not a favorite"),
                OutputFormat::Json => print_json(&Change {
                    id: hotel_id,
                    changed: removed,
                })?,
            }
            Ok(())
        }
    }
}

fn list(workspace: &Workspace, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let items = workspace.site.favorites().items();
    match format {
        OutputFormat::Human => {
            if items.is_empty() {
                println!("No favorites yet.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = items
                .iter()
                .map(|item| {
                    vec![
                        item.id.to_string(),
                        item.title().unwrap_or_default().to_string(),
                        item.location().unwrap_or_default().to_string(),
                        detail(item, "price"),
                    ]
                })
                .collect();
            print_table(&["ID", "TITLE", "LOCATION", "PRICE"], &rows);
        }
        OutputFormat::Json => print_json(items)?,
    }
    Ok(())
}
