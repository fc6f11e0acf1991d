//! Catalog loading: built-in sample or a TOML catalog file
//!
//! File format:
//! ```toml
//! [[places]]
//! name = "Teaspoon Boba"
//! category = "Food"
//! subcategory = "Boba"
//! distance = 0.5
//! website = "www.teaspoon.com"
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::Place;
use crate::infrastructure::sample::sample_places;
use crate::infrastructure::traits::FileSystem;
use crate::infrastructure::{InfraError, InfraResult};

/// One `[[places]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub distance: f64,
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    places: Vec<PlaceRecord>,
}

/// Reads place records through the [`FileSystem`] boundary.
pub struct CatalogLoader {
    fs: Arc<dyn FileSystem>,
}

impl CatalogLoader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Places from `path`, or the built-in sample when no path is given.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: Option<&Path>) -> InfraResult<Vec<Place>> {
        match path {
            Some(path) => self.load_file(path),
            None => {
                debug!("load: using built-in sample catalog");
                Ok(sample_places())
            }
        }
    }

    /// Read and validate a TOML catalog file.
    pub fn load_file(&self, path: &Path) -> InfraResult<Vec<Place>> {
        if !self.fs.exists(path) {
            return Err(InfraError::io(
                format!("catalog file not found: {}", path.display()),
                std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
            ));
        }
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| InfraError::io(format!("read catalog {}", path.display()), e))?;
        let places = parse_catalog(&content, path)?;
        debug!("load_file: {} places from {}", places.len(), path.display());
        Ok(places)
    }
}

/// Parse catalog TOML, validating every record.
pub fn parse_catalog(content: &str, path: &Path) -> InfraResult<Vec<Place>> {
    let file: CatalogFile = toml::from_str(content).map_err(|e| InfraError::CatalogFormat {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    file.places
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            Place::new(
                record.name,
                record.category,
                record.subcategory,
                record.distance,
                record.website,
            )
            .map_err(|e| InfraError::CatalogFormat {
                path: path.to_path_buf(),
                message: format!("place #{}: {}", i + 1, e),
            })
        })
        .collect()
}
