//! Info command - shows data file, session and account/favorites counts.

use egytravel::Latency;
use serde::Serialize;

use crate::backend::Workspace;
use crate::output::{OutputFormat, print_json};

#[derive(Debug, Serialize)]
struct InfoReport {
    data_file: String,
    session: Option<String>,
    accounts: usize,
    favorites: usize,
    latency: Latency,
}

async fn collect(workspace: &Workspace) -> Result<InfoReport, Box<dyn std::error::Error>> {
    let site = &workspace.site;
    let accounts = site.identity().list().await?.len();

    // Counting bootstraps the admin record; keep the file in step with the count
    if workspace.fresh {
        workspace.save().await?;
    }

    Ok(InfoReport {
        data_file: workspace.data_file.display().to_string(),
        session: site.current_user().map(|user| user.email.clone()),
        accounts,
        favorites: site.favorites().len(),
        latency: site.config().latency,
    })
}

/// Run the info command
pub async fn run(workspace: &Workspace, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let info = collect(workspace).await?;

    match format {
        OutputFormat::Human => {
            println!("Data file:   {}", info.data_file);
            println!("Session:     {}", info.session.as_deref().unwrap_or("logged out"));
            println!("Accounts:    {}", info.accounts);
            println!("Favorites:   {}", info.favorites);
            println!(
                "Latency:     exists {}ms, login {}ms, signup {}ms",
                info.latency.exists_ms, info.latency.login_ms, info.latency.signup_ms
            );
        }
        OutputFormat::Json => print_json(&info)?,
    }

    Ok(())
}
