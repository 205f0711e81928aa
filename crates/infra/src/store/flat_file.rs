use std::fs::{self, File};
use std::io::Read;
use std::path::PathBuf;

use chrono::Utc;

use dealership_inventory::CarRegistry;

use super::{InventoryStore, LoadReport, SaveReport, StoreError, ingest, render};

/// Inventory checkpoint on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

}

impl InventoryStore for FlatFileStore {
    fn load_into(&self, registry: &mut CarRegistry) -> Result<LoadReport, StoreError> {
        registry.clear();

        let mut file = File::open(&self.path).map_err(|source| {
            tracing::warn!(path = ?self.path, error = %source, "inventory file not readable; starting empty");
            StoreError::Open {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let report = ingest(&bytes, registry, Utc::now());
        tracing::info!(
            path = ?self.path,
            loaded = report.loaded,
            skipped = report.skipped.len(),
            next_id = ?registry.next_id(),
            "inventory loaded"
        );
        Ok(report)
    }

    fn save(&self, registry: &CarRegistry) -> Result<SaveReport, StoreError> {
        let (text, written) = render(registry);

        fs::write(&self.path, text).map_err(|source| {
            tracing::error!(path = ?self.path, error = %source, "could not save inventory");
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::info!(path = ?self.path, written, "inventory saved");
        Ok(SaveReport { written })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
