//! Opening and saving the site state on disk.

use std::path::{Path, PathBuf};

use egytravel::{Config, Latency, Site, backend::database::InMemory};

use crate::cli::StoreArgs;

/// File name of the persisted store inside the data directory.
pub const DATA_FILE: &str = "egytravel.json";

/// A site opened over the data file, ready to be saved back.
pub struct Workspace {
    pub site: Site,
    pub data_file: PathBuf,
    /// Whether the store was empty when loaded
    pub fresh: bool,
}

/// Resolve the configuration from the optional config file and flags.
pub async fn load_config(args: &StoreArgs) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            Config::load_from_file(path).await?
        }
        None => Config::default(),
    };

    if args.simulate_latency {
        config = config.with_latency(Latency::simulated());
    }
    Ok(config)
}

/// Path of the data file for `args`.
pub fn data_file(args: &StoreArgs) -> PathBuf {
    args.data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_FILE)
}

impl Workspace {
    /// Load the data file (a missing file starts empty) and open the site.
    pub async fn open(args: &StoreArgs) -> Result<Self, Box<dyn std::error::Error>> {
        let config = load_config(args).await?;
        let data_file = data_file(args);

        let backend = InMemory::load_from_file(&data_file).await?;
        let fresh = backend.is_empty().await;
        if fresh {
            tracing::debug!("Starting with fresh data at {}", data_file.display());
        } else {
            tracing::debug!("Loaded existing data from {}", data_file.display());
        }

        let site = Site::open(Box::new(backend), config).await?;
        Ok(Self {
            site,
            data_file,
            fresh,
        })
    }

    /// Write the store back to the data file.
    pub async fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(dir) = self.data_file.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }
        save_backend(&self.site, &self.data_file).await
    }
}

async fn save_backend(site: &Site, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let backend = site
        .backend()
        .as_any()
        .downcast_ref::<InMemory>()
        .ok_or("site is not backed by the in-memory store")?;
    backend.save_to_file(path).await?;
    tracing::debug!("Saved data to {}", path.display());
    Ok(())
}
