//! Infrastructure layer: inventory persistence.
//!
//! The inventory is checkpointed as a flat, `;`-separated text file, one car
//! per line. Loading is a destructive reset of the registry; saving never
//! touches in-memory state.

pub mod codec;
pub mod store;

pub use codec::{LineError, StoredCar, encode_line, parse_line};
pub use store::{
    FlatFileStore, InMemoryStore, InventoryStore, LoadReport, SaveReport, SkipReason, SkippedLine,
    StoreError,
};
