pub mod error;
pub mod repositories;
pub mod stores;
pub mod trait_store;

pub use error::{PersistError, Result};
pub use repositories::{TranscriptRepository, TRANSCRIPT_STORAGE_KEY};
pub use stores::{FileKeyValueStore, MemoryKeyValueStore};
pub use trait_store::KeyValueStore;
