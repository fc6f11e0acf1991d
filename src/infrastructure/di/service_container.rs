//! Service container for dependency injection
//!
//! Wires settings, I/O boundaries and the explorer service together.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::ExplorerService;
use crate::config::Settings;
use crate::infrastructure::catalog::CatalogLoader;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraResult;

/// Container holding the application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs }
    }

    pub fn catalog_loader(&self) -> CatalogLoader {
        CatalogLoader::new(Arc::clone(&self.fs))
    }

    /// Load the configured catalog into a fresh explorer session.
    pub fn explorer(&self) -> InfraResult<ExplorerService> {
        let places = self
            .catalog_loader()
            .load(self.settings.catalog_file.as_deref())?;
        debug!("explorer: {} places", places.len());
        Ok(ExplorerService::with_places(
            self.settings.explorer_options(),
            places,
        ))
    }
}
