//! Application state

use crate::config::ServerConfig;
use anyhow::Result;
use booklist_core::{BookTracker, Catalog, GoogleBooksCatalog};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The single session served by this process
    pub tracker: Arc<BookTracker>,

    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create state backed by the configured Google Books endpoint
    pub fn new(config: ServerConfig) -> Result<Self> {
        let catalog =
            GoogleBooksCatalog::with_options(&config.catalog_url, config.catalog_timeout)?;
        tracing::info!(url = %catalog.volumes_url(), "Using catalog");
        Ok(Self::with_catalog(config, Arc::new(catalog)))
    }

    /// Create state backed by an arbitrary catalog
    pub fn with_catalog(config: ServerConfig, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            tracker: Arc::new(BookTracker::new(catalog)),
            config: Arc::new(config),
        }
    }

    /// Run the startup search in the background
    pub fn spawn_initial_load(&self) -> tokio::task::JoinHandle<()> {
        let tracker = Arc::clone(&self.tracker);
        let query = self.config.initial_query.clone();
        tokio::spawn(async move { tracker.load_initial(&query).await })
    }
}
