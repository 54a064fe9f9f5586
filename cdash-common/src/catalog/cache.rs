//! Process-lifetime dataset cache
//!
//! The catalog is read and cleaned at most once. A failed load is not
//! remembered, so a request made after the file appears will succeed.
//! Nothing invalidates a successful load short of restarting the process.

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

use super::loader::load_dataset;
use super::record::Dataset;
use crate::error::Result;

/// Lazily-initialised, read-only holder for the cleaned catalog
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    cell: OnceCell<Arc<Dataset>>,
}

impl DatasetCache {
    /// Create an empty cache for the catalog at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the cached dataset, loading it on first use
    pub fn get_or_load(&self) -> Result<Arc<Dataset>> {
        self.cell
            .get_or_try_init(|| {
                let dataset = load_dataset(&self.path).inspect_err(|e| {
                    error!("Failed to load catalog: {}", e);
                })?;
                info!("Catalog cached for process lifetime");
                Ok(Arc::new(dataset))
            })
            .map(Arc::clone)
    }

    /// The dataset if a load has already succeeded
    pub fn get(&self) -> Option<Arc<Dataset>> {
        self.cell.get().map(Arc::clone)
    }

    /// Whether a load has already succeeded
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}
