use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::Utc;

use dealership_inventory::CarRegistry;

use super::{InventoryStore, LoadReport, SaveReport, StoreError, ingest, render};

const MEMORY_PATH: &str = "<memory>";

/// In-memory inventory snapshot.
///
/// Intended for tests/dev. An empty store behaves like a missing file.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: RwLock<Option<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot text.
    pub fn with_snapshot(text: impl Into<String>) -> Self {
        Self {
            snapshot: RwLock::new(Some(text.into())),
        }
    }

    /// The last saved text, if any.
    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.read().ok().and_then(|s| s.clone())
    }
}

impl InventoryStore for InMemoryStore {
    fn load_into(&self, registry: &mut CarRegistry) -> Result<LoadReport, StoreError> {
        registry.clear();

        let guard = self.snapshot.read().map_err(|_| StoreError::Read {
            path: PathBuf::from(MEMORY_PATH),
            source: io::Error::other("lock poisoned"),
        })?;
        let Some(text) = guard.as_deref() else {
            return Err(StoreError::Open {
                path: PathBuf::from(MEMORY_PATH),
                source: io::Error::new(io::ErrorKind::NotFound, "no snapshot saved"),
            });
        };

        Ok(ingest(text.as_bytes(), registry, Utc::now()))
    }

    fn save(&self, registry: &CarRegistry) -> Result<SaveReport, StoreError> {
        let (text, written) = render(registry);

        let mut guard = self.snapshot.write().map_err(|_| StoreError::Write {
            path: PathBuf::from(MEMORY_PATH),
            source: io::Error::other("lock poisoned"),
        })?;
        *guard = Some(text);

        Ok(SaveReport { written })
    }

    fn location(&self) -> String {
        MEMORY_PATH.to_string()
    }
}
