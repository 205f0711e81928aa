//! Inventory checkpoint boundary.
//!
//! A store reloads a [`CarRegistry`] from a line-oriented snapshot and writes
//! it back. Both operations degrade to a reported outcome; neither is fatal.

pub mod flat_file;
pub mod in_memory;

pub use flat_file::FlatFileStore;
pub use in_memory::InMemoryStore;

use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

use dealership_inventory::{CarRegistry, RestoreError};

use crate::codec::{LineError, encode_line, parse_line};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open {path:?} for loading: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a line was left out of a load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error(transparent)]
    Malformed(#[from] LineError),

    #[error(transparent)]
    Rejected(#[from] RestoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line_no: usize,
    /// The raw line, lossily decoded for display only.
    pub content: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveReport {
    pub written: usize,
}

/// Persistence seam for the inventory.
pub trait InventoryStore {
    /// Replace the registry's contents with the stored snapshot.
    ///
    /// The registry is cleared (and numbering reset to 1) before the source
    /// is read, so on `Err` it is left empty.
    fn load_into(&self, registry: &mut CarRegistry) -> Result<LoadReport, StoreError>;

    /// Write every car, in registry order, replacing the previous snapshot.
    fn save(&self, registry: &CarRegistry) -> Result<SaveReport, StoreError>;

    /// Where the snapshot lives, for user-facing messages.
    fn location(&self) -> String;
}

/// Restore every decodable line of `bytes` into an (already cleared) registry.
///
/// Lines are decoded one at a time. A line that is not UTF-8 is skipped
/// like any other malformed line instead of being repaired.
pub(crate) fn ingest(bytes: &[u8], registry: &mut CarRegistry, restored_at: DateTime<Utc>) -> LoadReport {
    let mut report = LoadReport::default();

    for (idx, raw) in split_lines(bytes).enumerate() {
        let outcome = match std::str::from_utf8(raw) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => parse_line(line)
                .map_err(SkipReason::from)
                .and_then(|stored| {
                    registry
                        .restore(stored.into(), restored_at)
                        .map_err(SkipReason::from)
                }),
            Err(e) => Err(SkipReason::from(LineError::InvalidUtf8 {
                valid_up_to: e.valid_up_to(),
            })),
        };

        match outcome {
            Ok(_) => report.loaded += 1,
            Err(reason) => {
                let content = String::from_utf8_lossy(raw).into_owned();
                tracing::warn!(line_no = idx + 1, line = %content, %reason, "skipping inventory line");
                report.skipped.push(SkippedLine {
                    line_no: idx + 1,
                    content,
                    reason,
                });
            }
        }
    }

    report
}

/// `\n`-separated lines with a trailing `\r` removed, as `str::lines` does.
fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes
        .split(|b| *b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Render the whole registry, one newline-terminated line per car.
pub(crate) fn render(registry: &CarRegistry) -> (String, usize) {
    let mut out = String::new();
    let mut written = 0;

    for car in registry.cars() {
        if car.model().contains([';', '\n', '\r']) {
            tracing::warn!(
                car_id = %car.id_typed(),
                model = %car.model(),
                "model contains a field or line separator; the saved line will not load back"
            );
        }
        out.push_str(&encode_line(car));
        out.push('\n');
        written += 1;
    }

    (out, written)
}
