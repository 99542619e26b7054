//! Storage layer for todos - the local persistent key-value store.
//!
//! The store persists whole collections as string blobs under fixed keys, the
//! way a browser's local storage would. Three backends share one trait:
//! - **FileStore**: one JSON file per key in a data directory
//! - **SqliteStore**: a `kv` table in a SQLite database
//! - **MemoryStore**: a process-local map (tests, `--backend memory`)

mod file;
mod memory;
mod sqlite;
mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{KeyValueStore, validate_key};

use log::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::Result;

/// Database file name used by the SQLite backend inside the data directory.
pub const SQLITE_FILE: &str = "todos.db";

/// Open the backend selected by configuration.
pub fn open(config: &StorageConfig) -> Result<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match config.backend {
        StorageBackend::File => Box::new(FileStore::new(config.dir.join("store"))?),
        StorageBackend::Sqlite => Box::new(SqliteStore::open(config.dir.join(SQLITE_FILE))?),
        StorageBackend::Memory => Box::new(MemoryStore::new()),
    };
    info!("Opened {:?} storage at {}", config.backend, config.dir.display());
    Ok(store)
}
